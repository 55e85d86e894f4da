use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        journal::{entities::JournalAnalysis, ports::JournalRepository},
    },
    entity::journal_entries::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresJournalRepository {
    pub db: DatabaseConnection,
}

impl PostgresJournalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl JournalRepository for PostgresJournalRepository {
    async fn create_entry(&self, analysis: JournalAnalysis) -> Result<JournalAnalysis, CoreError> {
        let active_model = ActiveModel {
            id: Set(analysis.id),
            text: Set(analysis.text),
            mood: Set(analysis.mood.as_str().to_string()),
            stress_level: Set(analysis.stress_level.as_str().to_string()),
            anxiety_level: Set(analysis.anxiety_level.as_str().to_string()),
            depression_level: Set(analysis.depression_level.as_str().to_string()),
            mood_solution: Set(analysis.mood_solution),
            stress_solution: Set(analysis.stress_solution),
            anxiety_solution: Set(analysis.anxiety_solution),
            depression_solution: Set(analysis.depression_solution),
            created_at: Set(analysis.created_at.naive_utc()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to store journal entry: {}", e);
                CoreError::PersistenceFailed(e.to_string())
            })?;

        Ok(JournalAnalysis::from(created))
    }

    async fn fetch_entries(&self, limit: Option<u32>) -> Result<Vec<JournalAnalysis>, CoreError> {
        let mut query = Entity::find().order_by_desc(Column::CreatedAt);

        if let Some(limit) = limit {
            query = query.limit(limit as u64);
        }

        let entries = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch journal entries: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(JournalAnalysis::from)
            .collect();

        Ok(entries)
    }
}
