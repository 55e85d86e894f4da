use tracing::instrument;

use crate::domain::{
    chat::ports::ChatRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnostics::ports::MemoryProbe,
    journal::{
        entities::{JournalAnalysis, JournalAnalysisConfig, JournalRiskLevels},
        ports::{JournalRepository, JournalService},
    },
    questionnaire::ports::{PredictionRepository, QuestionnaireResponseRepository},
    training::ports::{ArtifactStore, DatasetSource},
};

const JOURNAL_CONTENT_FIELD: &str = "journalContent";

impl<QR, PR, JR, CR, AS, DS, MP> JournalService for Service<QR, PR, JR, CR, AS, DS, MP>
where
    QR: QuestionnaireResponseRepository,
    PR: PredictionRepository,
    JR: JournalRepository,
    CR: ChatRepository,
    AS: ArtifactStore,
    DS: DatasetSource,
    MP: MemoryProbe,
{
    #[instrument(skip(self, content), fields(length = content.len()))]
    async fn analyze_journal(&self, content: String) -> Result<JournalAnalysis, CoreError> {
        if content.trim().is_empty() {
            return Err(CoreError::invalid_field(
                JOURNAL_CONTENT_FIELD,
                "journal content must not be empty",
            ));
        }

        let tagger = &self.settings.journal_tagger;
        let tags = tagger.tag(&content);
        let advice = tagger.advice();

        let analysis = JournalAnalysis::new(JournalAnalysisConfig {
            mood_solution: advice.mood.select(tags.mood).to_string(),
            stress_solution: advice.stress.select(tags.stress).to_string(),
            anxiety_solution: advice.anxiety.select(tags.anxiety).to_string(),
            depression_solution: advice.depression.select(tags.depression).to_string(),
            text: content,
            tags,
        });

        self.journal_repository.create_entry(analysis.clone()).await?;

        Ok(analysis)
    }

    fn tag_journal(&self, content: String) -> Result<JournalRiskLevels, CoreError> {
        Ok(self.settings.quick_tagger.tag(&content))
    }

    #[instrument(skip(self))]
    async fn get_journal_entries(&self, limit: Option<u32>) -> Result<Vec<JournalAnalysis>, CoreError> {
        self.journal_repository.fetch_entries(limit).await
    }
}
