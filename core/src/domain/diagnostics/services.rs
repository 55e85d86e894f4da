use crate::domain::{
    chat::ports::ChatRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnostics::{
        entities::MemoryUsage,
        ports::{DiagnosticsService, MemoryProbe},
    },
    journal::ports::JournalRepository,
    questionnaire::ports::{PredictionRepository, QuestionnaireResponseRepository},
    training::ports::{ArtifactStore, DatasetSource},
};

impl<QR, PR, JR, CR, AS, DS, MP> DiagnosticsService for Service<QR, PR, JR, CR, AS, DS, MP>
where
    QR: QuestionnaireResponseRepository,
    PR: PredictionRepository,
    JR: JournalRepository,
    CR: ChatRepository,
    AS: ArtifactStore,
    DS: DatasetSource,
    MP: MemoryProbe,
{
    fn memory_usage(&self) -> Result<MemoryUsage, CoreError> {
        self.memory_probe.memory_usage()
    }
}
