use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{model::ForestParams, training::metrics::ClassificationReport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub n_estimators: usize,
    pub seed: u64,
    /// Fraction of rows held out for evaluation.
    pub test_size: f64,
    pub max_depth: Option<usize>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            seed: 42,
            test_size: 0.2,
            max_depth: None,
        }
    }
}

impl TrainingConfig {
    pub fn forest_params(&self) -> ForestParams {
        ForestParams {
            n_estimators: self.n_estimators,
            seed: self.seed,
            max_depth: self.max_depth,
            ..ForestParams::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrainingReport {
    pub training_id: Uuid,
    pub trained_at: DateTime<Utc>,
    pub accuracy: f64,
    pub train_size: usize,
    pub test_size: usize,
    pub encoded_columns: Vec<String>,
    pub classification_report: ClassificationReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RetrainOutcome {
    pub model_version: u64,
    pub report: TrainingReport,
}
