use serde_json::Value;
use tracing::{error, info, instrument};

use crate::domain::{
    chat::ports::ChatRepository,
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    diagnostics::ports::MemoryProbe,
    encoding::FeatureEncoder,
    journal::ports::JournalRepository,
    questionnaire::{
        entities::{PredictionRecord, PredictionRecordConfig, QuestionnaireResponse, StoredResponse},
        ports::{PredictionRepository, QuestionnaireResponseRepository, QuestionnaireService},
        value_objects::{SubmissionOutcome, SubmitQuestionnaireInput},
    },
    training::ports::{ArtifactStore, DatasetSource},
};

impl<QR, PR, JR, CR, AS, DS, MP> QuestionnaireService for Service<QR, PR, JR, CR, AS, DS, MP>
where
    QR: QuestionnaireResponseRepository,
    PR: PredictionRepository,
    JR: JournalRepository,
    CR: ChatRepository,
    AS: ArtifactStore,
    DS: DatasetSource,
    MP: MemoryProbe,
{
    #[instrument(skip(self, input))]
    async fn submit_questionnaire(
        &self,
        input: SubmitQuestionnaireInput,
    ) -> Result<SubmissionOutcome, CoreError> {
        let settings = &self.settings;
        let response = QuestionnaireResponse::from_payload(input.payload, settings.schema)?;
        let screening = settings.scorer.score(&response);

        let snapshot = self.model_registry.snapshot();
        let model = snapshot.model.as_ref().ok_or(CoreError::ModelUnavailable)?;
        model.ensure_schema(settings.schema)?;

        let vector = FeatureEncoder::new(
            settings.schema,
            &snapshot.encoders,
            &settings.fallback,
            settings.unseen_category_policy,
        )
        .with_numeric_fields(&model.numeric_features)
        .encode(&response)?;

        let label = model.predict(&vector)?.to_string();
        let suggestion = settings
            .schema
            .offers_suggestions()
            .then(|| settings.suggestions.suggest(&label).to_string());

        info!(
            user_id = %response.user_id,
            label = %label,
            stress = %screening.stress_level,
            anxiety = %screening.anxiety_level,
            depression = %screening.depression_level,
            model_version = snapshot.version,
            "questionnaire classified"
        );

        let submission_id = generate_uuid_v7();
        let user_id = response.user_id.clone();
        let features = Value::Object(response.into_raw());

        // Two independent writes; a failure between them leaves only the
        // response document, identifiable by its submission id.
        self.response_repository
            .create_response(StoredResponse::new(
                submission_id,
                user_id.clone(),
                features.clone(),
                screening.clone(),
            ))
            .await
            .map_err(|e| persistence_error("questionnaire response", e))?;

        let record = PredictionRecord::new(PredictionRecordConfig {
            submission_id,
            user_id,
            features,
            label,
            suggestion,
            model_version: snapshot.version,
            training_id: Some(model.training_id),
        });
        let outcome = SubmissionOutcome {
            submission_id,
            prediction: record.prediction.clone(),
            suggestion: record.suggestion.clone(),
            model_version: record.model_version,
            screening,
        };

        self.prediction_repository
            .create_prediction(record)
            .await
            .map_err(|e| persistence_error("prediction", e))?;

        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn get_predictions(&self, user_id: String) -> Result<Vec<PredictionRecord>, CoreError> {
        self.prediction_repository
            .fetch_predictions_by_user(user_id)
            .await
    }
}

fn persistence_error(what: &str, err: CoreError) -> CoreError {
    error!("Failed to store {}: {}", what, err);
    match err {
        CoreError::PersistenceFailed(_) => err,
        other => CoreError::PersistenceFailed(format!("{what}: {other}")),
    }
}
