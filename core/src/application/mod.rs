use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::{
        common::{MindscopeConfig, ModelConfig, services::{Service, ServiceSettings}},
        model::ModelRegistry,
    },
    infrastructure::{
        artifacts::FileArtifactStore,
        chat::PostgresChatRepository,
        dataset::CsvDatasetSource,
        db::postgres::{Postgres, PostgresConfig},
        diagnostics::SysinfoMemoryProbe,
        journal::PostgresJournalRepository,
        questionnaire::{PostgresPredictionRepository, PostgresQuestionnaireResponseRepository},
    },
};

pub type MindscopeService = Service<
    PostgresQuestionnaireResponseRepository,
    PostgresPredictionRepository,
    PostgresJournalRepository,
    PostgresChatRepository,
    FileArtifactStore,
    CsvDatasetSource,
    SysinfoMemoryProbe,
>;

/// Connects to Postgres, applies migrations and loads the current model.
pub async fn create_service(config: MindscopeConfig) -> Result<MindscopeService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    build_service(postgres.get_db(), &config.model)
}

/// Wires the service around an existing connection.
///
/// A missing model is not an error: the service starts and `/submit`
/// reports the model as unavailable until a retrain succeeds.
pub fn build_service(
    db: DatabaseConnection,
    config: &ModelConfig,
) -> Result<MindscopeService, anyhow::Error> {
    let artifact_store = FileArtifactStore::new(config.artifacts_dir.clone());
    let registry = ModelRegistry::load(&artifact_store)?;

    Ok(Service::new(
        PostgresQuestionnaireResponseRepository::new(db.clone()),
        PostgresPredictionRepository::new(db.clone()),
        PostgresJournalRepository::new(db.clone()),
        PostgresChatRepository::new(db),
        artifact_store,
        CsvDatasetSource::new(config.dataset_path.clone()),
        SysinfoMemoryProbe::new(),
        Arc::new(registry),
        ServiceSettings::from(config),
    ))
}
