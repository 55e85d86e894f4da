use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    model::RandomForest,
    questionnaire::entities::{EncodedFeatureVector, FeatureSchema},
};

/// A fitted classifier together with the feature layout and label names it
/// was trained with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    pub training_id: Uuid,
    pub trained_at: DateTime<Utc>,
    pub feature_names: Vec<String>,
    pub labels: Vec<String>,
    /// Columns fed to the forest as numbers instead of through an encoder.
    #[serde(default)]
    pub numeric_features: BTreeSet<String>,
    pub forest: RandomForest,
}

impl TrainedModel {
    pub fn ensure_schema(&self, schema: FeatureSchema) -> Result<(), CoreError> {
        let expected = schema.field_names();
        if self.feature_names != expected {
            return Err(CoreError::ModelSchemaMismatch {
                trained: self.feature_names.clone(),
                expected,
            });
        }
        Ok(())
    }

    pub fn predict(&self, vector: &EncodedFeatureVector) -> Result<&str, CoreError> {
        if vector.len() != self.feature_names.len() {
            return Err(CoreError::invalid_field(
                "features",
                format!(
                    "expected {} encoded values, got {}",
                    self.feature_names.len(),
                    vector.len()
                ),
            ));
        }

        let class = self.forest.predict(vector.values());
        self.labels
            .get(class)
            .map(String::as_str)
            .ok_or(CoreError::InternalServerError)
    }
}
