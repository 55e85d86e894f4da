use tracing::{debug, error, info, instrument};

use crate::domain::{
    chat::ports::ChatRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diagnostics::ports::MemoryProbe,
    journal::ports::JournalRepository,
    questionnaire::ports::{PredictionRepository, QuestionnaireResponseRepository},
    training::{
        Trainer,
        ports::{ArtifactStore, DatasetSource, TrainingService},
        value_objects::RetrainOutcome,
    },
};

impl<QR, PR, JR, CR, AS, DS, MP> TrainingService for Service<QR, PR, JR, CR, AS, DS, MP>
where
    QR: QuestionnaireResponseRepository,
    PR: PredictionRepository,
    JR: JournalRepository,
    CR: ChatRepository,
    AS: ArtifactStore + Clone + 'static,
    DS: DatasetSource + Clone + 'static,
    MP: MemoryProbe,
{
    #[instrument(skip(self))]
    async fn retrain(&self) -> Result<RetrainOutcome, CoreError> {
        // Held until publish: disk and snapshot come from the same run.
        let _guard = self.retrain_lock.lock().await;
        debug!("retrain lock acquired");

        let dataset_source = self.dataset_source.clone();
        let artifact_store = self.artifact_store.clone();
        let settings = self.settings.clone();

        // CPU-bound; keep it off the async workers.
        let outcome = tokio::task::spawn_blocking(move || {
            let dataset = dataset_source.load()?;
            let outcome = Trainer::new(settings.schema, settings.training.clone()).train(&dataset)?;
            artifact_store.save(&outcome.model, &outcome.encoders)?;
            Ok::<_, CoreError>(outcome)
        })
        .await
        .map_err(|e| {
            error!("Training task panicked: {}", e);
            CoreError::InternalServerError
        })??;

        let snapshot = self
            .model_registry
            .publish(Some(outcome.model), outcome.encoders);

        info!(
            model_version = snapshot.version,
            accuracy = outcome.report.accuracy,
            "retrained model is live"
        );

        Ok(RetrainOutcome {
            model_version: snapshot.version,
            report: outcome.report,
        })
    }
}
