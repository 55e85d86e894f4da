use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    chat::ports::ChatRepository,
    common::ModelConfig,
    diagnostics::ports::MemoryProbe,
    encoding::{FallbackTable, UnseenCategoryPolicy},
    journal::{JournalTagger, QuickJournalTagger, ports::JournalRepository},
    model::{ModelRegistry, SuggestionTable},
    questionnaire::{
        entities::FeatureSchema,
        scoring::QuestionnaireScorer,
        ports::{PredictionRepository, QuestionnaireResponseRepository},
    },
    training::{
        ports::{ArtifactStore, DatasetSource},
        value_objects::TrainingConfig,
    },
};

/// Lookup tables and switches shared by every request.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub schema: FeatureSchema,
    pub unseen_category_policy: UnseenCategoryPolicy,
    pub training: TrainingConfig,
    pub fallback: FallbackTable,
    pub suggestions: SuggestionTable,
    pub scorer: QuestionnaireScorer,
    pub journal_tagger: JournalTagger,
    pub quick_tagger: QuickJournalTagger,
}

impl From<&ModelConfig> for ServiceSettings {
    fn from(config: &ModelConfig) -> Self {
        Self {
            schema: config.schema,
            unseen_category_policy: config.unseen_category_policy,
            training: config.training.clone(),
            fallback: FallbackTable::default(),
            suggestions: SuggestionTable::default(),
            scorer: QuestionnaireScorer::default(),
            journal_tagger: JournalTagger::default(),
            quick_tagger: QuickJournalTagger::default(),
        }
    }
}

#[derive(Clone)]
pub struct Service<QR, PR, JR, CR, AS, DS, MP>
where
    QR: QuestionnaireResponseRepository,
    PR: PredictionRepository,
    JR: JournalRepository,
    CR: ChatRepository,
    AS: ArtifactStore,
    DS: DatasetSource,
    MP: MemoryProbe,
{
    pub(crate) response_repository: QR,
    pub(crate) prediction_repository: PR,
    pub(crate) journal_repository: JR,
    pub(crate) chat_repository: CR,
    pub(crate) artifact_store: AS,
    pub(crate) dataset_source: DS,
    pub(crate) memory_probe: MP,
    pub(crate) model_registry: Arc<ModelRegistry>,
    pub(crate) settings: Arc<ServiceSettings>,
    /// Held for a whole retrain, from dataset load to publish.
    pub(crate) retrain_lock: Arc<Mutex<()>>,
}

impl<QR, PR, JR, CR, AS, DS, MP> Service<QR, PR, JR, CR, AS, DS, MP>
where
    QR: QuestionnaireResponseRepository,
    PR: PredictionRepository,
    JR: JournalRepository,
    CR: ChatRepository,
    AS: ArtifactStore,
    DS: DatasetSource,
    MP: MemoryProbe,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        response_repository: QR,
        prediction_repository: PR,
        journal_repository: JR,
        chat_repository: CR,
        artifact_store: AS,
        dataset_source: DS,
        memory_probe: MP,
        model_registry: Arc<ModelRegistry>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            response_repository,
            prediction_repository,
            journal_repository,
            chat_repository,
            artifact_store,
            dataset_source,
            memory_probe,
            model_registry,
            settings: Arc::new(settings),
            retrain_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn model_registry(&self) -> &Arc<ModelRegistry> {
        &self.model_registry
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}
