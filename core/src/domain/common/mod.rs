use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::{
    encoding::UnseenCategoryPolicy, questionnaire::entities::FeatureSchema,
    training::value_objects::TrainingConfig,
};

pub mod entities;
pub mod services;
#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct MindscopeConfig {
    pub database: DatabaseConfig,
    pub model: ModelConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct ModelConfig {
    /// Directory holding `model.json` and `label_encoders/`.
    pub artifacts_dir: PathBuf,
    /// CSV dataset consumed by `/retrain`.
    pub dataset_path: PathBuf,
    pub schema: FeatureSchema,
    pub unseen_category_policy: UnseenCategoryPolicy,
    pub training: TrainingConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("artifacts"),
            dataset_path: PathBuf::from("mental_health_questionnaire.csv"),
            schema: FeatureSchema::Standard,
            unseen_category_policy: UnseenCategoryPolicy::Default,
            training: TrainingConfig::default(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
