pub mod dataset;
pub mod metrics;
pub mod ports;
pub mod services;
pub mod trainer;
pub mod value_objects;

pub use dataset::Dataset;
pub use metrics::ClassificationReport;
pub use ports::*;
pub use trainer::{Trainer, TrainingOutcome};
pub use value_objects::*;
