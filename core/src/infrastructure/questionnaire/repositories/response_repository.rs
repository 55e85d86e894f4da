use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        questionnaire::{entities::StoredResponse, ports::QuestionnaireResponseRepository},
    },
    entity::questionnaire_responses::{ActiveModel, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresQuestionnaireResponseRepository {
    pub db: DatabaseConnection,
}

impl PostgresQuestionnaireResponseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl QuestionnaireResponseRepository for PostgresQuestionnaireResponseRepository {
    async fn create_response(&self, response: StoredResponse) -> Result<StoredResponse, CoreError> {
        let screening = response
            .screening
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| {
                error!("Failed to serialize screening result: {}", e);
                CoreError::PersistenceFailed(e.to_string())
            })?;

        let active_model = ActiveModel {
            id: Set(response.id),
            user_id: Set(response.user_id),
            payload: Set(response.payload),
            screening: Set(screening),
            created_at: Set(response.created_at.naive_utc()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to store questionnaire response: {}", e);
                CoreError::PersistenceFailed(e.to_string())
            })?;

        Ok(StoredResponse::from(created))
    }
}
