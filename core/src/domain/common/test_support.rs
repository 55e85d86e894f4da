//! In-memory port implementations for service tests.

use std::sync::{Arc, Mutex};

use crate::domain::{
    chat::{entities::ChatMessage, ports::ChatRepository},
    common::{
        entities::app_errors::CoreError,
        services::{Service, ServiceSettings},
        ModelConfig,
    },
    diagnostics::{entities::MemoryUsage, ports::MemoryProbe},
    encoding::FieldEncoders,
    journal::{entities::JournalAnalysis, ports::JournalRepository},
    model::{ModelRegistry, TrainedModel},
    questionnaire::{
        entities::{FeatureSchema, PredictionRecord, StoredResponse},
        ports::{PredictionRepository, QuestionnaireResponseRepository},
    },
    training::{
        Dataset, Trainer,
        ports::{ArtifactStore, DatasetSource},
        trainer::tests::sample_dataset,
        value_objects::TrainingConfig,
    },
};

pub(crate) type TestService = Service<
    InMemoryResponses,
    InMemoryPredictions,
    InMemoryJournal,
    InMemoryChat,
    InMemoryArtifacts,
    StaticDataset,
    FixedMemoryProbe,
>;

#[derive(Clone, Default)]
pub(crate) struct InMemoryResponses {
    responses: Arc<Mutex<Vec<StoredResponse>>>,
}

impl InMemoryResponses {
    pub(crate) fn responses(&self) -> Vec<StoredResponse> {
        self.responses.lock().unwrap().clone()
    }
}

impl QuestionnaireResponseRepository for InMemoryResponses {
    async fn create_response(&self, response: StoredResponse) -> Result<StoredResponse, CoreError> {
        self.responses.lock().unwrap().push(response.clone());
        Ok(response)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryPredictions {
    records: Arc<Mutex<Vec<PredictionRecord>>>,
    failing: bool,
}

impl InMemoryPredictions {
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

impl PredictionRepository for InMemoryPredictions {
    async fn create_prediction(&self, record: PredictionRecord) -> Result<PredictionRecord, CoreError> {
        if self.failing {
            return Err(CoreError::InternalServerError);
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn fetch_predictions_by_user(&self, user_id: String) -> Result<Vec<PredictionRecord>, CoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryJournal {
    entries: Arc<Mutex<Vec<JournalAnalysis>>>,
}

impl InMemoryJournal {
    pub(crate) fn entries(&self) -> Vec<JournalAnalysis> {
        self.entries.lock().unwrap().clone()
    }
}

impl JournalRepository for InMemoryJournal {
    async fn create_entry(&self, analysis: JournalAnalysis) -> Result<JournalAnalysis, CoreError> {
        self.entries.lock().unwrap().push(analysis.clone());
        Ok(analysis)
    }

    async fn fetch_entries(&self, limit: Option<u32>) -> Result<Vec<JournalAnalysis>, CoreError> {
        let entries = self.entries.lock().unwrap();
        let limit = limit.map_or(entries.len(), |l| l as usize);
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryChat {
    messages: Arc<Mutex<Vec<ChatMessage>>>,
}

impl InMemoryChat {
    pub(crate) fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().unwrap().clone()
    }
}

impl ChatRepository for InMemoryChat {
    async fn create_message(&self, message: ChatMessage) -> Result<ChatMessage, CoreError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryArtifacts {
    saved: Arc<Mutex<Option<(TrainedModel, FieldEncoders)>>>,
}

impl ArtifactStore for InMemoryArtifacts {
    fn save(&self, model: &TrainedModel, encoders: &FieldEncoders) -> Result<(), CoreError> {
        *self.saved.lock().unwrap() = Some((model.clone(), encoders.clone()));
        Ok(())
    }

    fn load(&self) -> Result<Option<(TrainedModel, FieldEncoders)>, CoreError> {
        Ok(self.saved.lock().unwrap().clone())
    }
}

#[derive(Clone, Default)]
pub(crate) struct StaticDataset {
    dataset: Option<Dataset>,
}

impl DatasetSource for StaticDataset {
    fn load(&self) -> Result<Dataset, CoreError> {
        self.dataset
            .clone()
            .ok_or_else(|| CoreError::DatasetNotFound("dataset.csv".to_string()))
    }
}

#[derive(Clone, Default)]
pub(crate) struct FixedMemoryProbe;

impl MemoryProbe for FixedMemoryProbe {
    fn memory_usage(&self) -> Result<MemoryUsage, CoreError> {
        Ok(MemoryUsage::from_bytes(64 * 1024 * 1024, 512 * 1024 * 1024))
    }
}

pub(crate) fn quick_training() -> TrainingConfig {
    TrainingConfig {
        n_estimators: 15,
        ..TrainingConfig::default()
    }
}

fn settings(schema: FeatureSchema) -> ServiceSettings {
    ServiceSettings::from(&ModelConfig {
        schema,
        training: quick_training(),
        ..ModelConfig::default()
    })
}

fn build(
    schema: FeatureSchema,
    registry: ModelRegistry,
    predictions: InMemoryPredictions,
    dataset: Option<Dataset>,
) -> TestService {
    Service::new(
        InMemoryResponses::default(),
        predictions,
        InMemoryJournal::default(),
        InMemoryChat::default(),
        InMemoryArtifacts::default(),
        StaticDataset { dataset },
        FixedMemoryProbe,
        Arc::new(registry),
        settings(schema),
    )
}

pub(crate) fn untrained_service(schema: FeatureSchema) -> TestService {
    build(schema, ModelRegistry::empty(), InMemoryPredictions::default(), None)
}

pub(crate) fn service_with_dataset(schema: FeatureSchema, dataset: Dataset) -> TestService {
    build(
        schema,
        ModelRegistry::empty(),
        InMemoryPredictions::default(),
        Some(dataset),
    )
}

pub(crate) fn trained_registry(schema: FeatureSchema) -> ModelRegistry {
    let outcome = Trainer::new(schema, quick_training())
        .train(&sample_dataset(schema))
        .unwrap();
    ModelRegistry::new(Some(outcome.model), outcome.encoders)
}

pub(crate) fn service_with_trained_model(schema: FeatureSchema) -> TestService {
    build(
        schema,
        trained_registry(schema),
        InMemoryPredictions::default(),
        Some(sample_dataset(schema)),
    )
}

pub(crate) fn service_with_failing_predictions(schema: FeatureSchema) -> TestService {
    build(schema, trained_registry(schema), InMemoryPredictions::failing(), None)
}
