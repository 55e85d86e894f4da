use crate::domain::{
    common::entities::app_errors::CoreError,
    questionnaire::{
        entities::{PredictionRecord, StoredResponse},
        value_objects::{SubmissionOutcome, SubmitQuestionnaireInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait QuestionnaireService: Send + Sync {
    fn submit_questionnaire(
        &self,
        input: SubmitQuestionnaireInput,
    ) -> impl Future<Output = Result<SubmissionOutcome, CoreError>> + Send;

    fn get_predictions(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Vec<PredictionRecord>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait QuestionnaireResponseRepository: Send + Sync {
    fn create_response(
        &self,
        response: StoredResponse,
    ) -> impl Future<Output = Result<StoredResponse, CoreError>> + Send;
}

/// Append-only store of prediction records.
#[cfg_attr(test, mockall::automock)]
pub trait PredictionRepository: Send + Sync {
    fn create_prediction(
        &self,
        record: PredictionRecord,
    ) -> impl Future<Output = Result<PredictionRecord, CoreError>> + Send;

    fn fetch_predictions_by_user(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Vec<PredictionRecord>, CoreError>> + Send;
}
