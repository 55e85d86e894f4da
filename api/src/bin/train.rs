//! Offline retraining: reads the CSV dataset, fits encoders and the forest,
//! prints the evaluation and writes the artifacts.

use clap::Parser;
use dotenv::dotenv;
use mindscope_api::{
    application::logger::init_logger,
    args::{LogArgs, ModelArgs},
};
use mindscope_core::{
    domain::{
        common::ModelConfig,
        training::{
            Trainer,
            ports::{ArtifactStore, DatasetSource},
        },
    },
    infrastructure::{artifacts::FileArtifactStore, dataset::CsvDatasetSource},
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "mindscope-train", version, about = "Retrain the MindScope classifier")]
struct TrainArgs {
    #[command(flatten)]
    model: ModelArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = TrainArgs::parse();
    init_logger(&args.log);

    let config = ModelConfig::from(&args.model);
    let dataset = CsvDatasetSource::new(config.dataset_path.clone()).load()?;
    let outcome = Trainer::new(config.schema, config.training.clone()).train(&dataset)?;

    FileArtifactStore::new(config.artifacts_dir.clone()).save(&outcome.model, &outcome.encoders)?;

    info!(training_id = %outcome.report.training_id, "training finished");
    println!("Model Accuracy: {:.4}", outcome.report.accuracy);
    println!("Classification Report:");
    println!("{}", outcome.report.classification_report);
    println!(
        "Model and encoders saved to {}",
        config.artifacts_dir.display()
    );

    Ok(())
}
