use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::error;

use crate::{
    domain::{
        chat::{entities::ChatMessage, ports::ChatRepository},
        common::entities::app_errors::CoreError,
    },
    entity::chat_history::{ActiveModel, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresChatRepository {
    pub db: DatabaseConnection,
}

impl PostgresChatRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ChatRepository for PostgresChatRepository {
    async fn create_message(&self, message: ChatMessage) -> Result<ChatMessage, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(message.id),
            payload: Set(message.payload),
            created_at: Set(message.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to store chat message: {}", e);
            CoreError::PersistenceFailed(e.to_string())
        })?;

        Ok(ChatMessage::from(created))
    }
}
