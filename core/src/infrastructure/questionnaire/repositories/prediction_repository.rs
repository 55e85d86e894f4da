use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::json;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        questionnaire::{entities::PredictionRecord, ports::PredictionRepository},
    },
    entity::predictions::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresPredictionRepository {
    pub db: DatabaseConnection,
}

impl PostgresPredictionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PredictionRepository for PostgresPredictionRepository {
    async fn create_prediction(&self, record: PredictionRecord) -> Result<PredictionRecord, CoreError> {
        let active_model = ActiveModel {
            id: Set(record.id),
            submission_id: Set(record.submission_id),
            user_id: Set(record.user_id),
            features: Set(record.features),
            prediction: Set(json!(record.prediction)),
            suggestion: Set(record.suggestion),
            model_version: Set(i64::try_from(record.model_version).unwrap_or(i64::MAX)),
            training_id: Set(record.training_id),
            created_at: Set(record.created_at.naive_utc()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to store prediction: {}", e);
                CoreError::PersistenceFailed(e.to_string())
            })?;

        Ok(PredictionRecord::from(created))
    }

    async fn fetch_predictions_by_user(&self, user_id: String) -> Result<Vec<PredictionRecord>, CoreError> {
        let records = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch predictions by user: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(PredictionRecord::from)
            .collect();

        Ok(records)
    }
}
