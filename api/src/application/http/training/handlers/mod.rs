pub mod retrain;
