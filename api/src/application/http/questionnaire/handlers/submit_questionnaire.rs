use axum::extract::State;
use mindscope_core::domain::questionnaire::{
    ports::QuestionnaireService, scoring::ScreeningResult,
    value_objects::SubmitQuestionnaireInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::questionnaire::validators::SubmitQuestionnaireValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SubmitQuestionnaireResponse {
    /// Single predicted label, wrapped in a list.
    pub prediction: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub submission_id: Uuid,
    pub model_version: u64,
    /// Rule-based stress, anxiety and depression levels with advice.
    pub screening: ScreeningResult,
}

#[utoipa::path(
    post,
    path = "/submit",
    tag = "questionnaire",
    summary = "Submit a questionnaire",
    description = "Validates the answers, predicts a depression-risk label, scores stress, anxiety and depression from the answers and stores both the raw response and the prediction.",
    request_body = SubmitQuestionnaireValidator,
    responses(
        (status = 200, body = SubmitQuestionnaireResponse),
        (status = 400, description = "Missing or invalid fields", body = ApiErrorResponse),
        (status = 500, description = "Model unavailable or storage failure", body = ApiErrorResponse),
    ),
)]
pub async fn submit_questionnaire(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitQuestionnaireValidator>,
) -> Result<Response<SubmitQuestionnaireResponse>, ApiError> {
    let outcome = state
        .service
        .submit_questionnaire(SubmitQuestionnaireInput {
            payload: payload.answers,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SubmitQuestionnaireResponse {
        prediction: outcome.prediction,
        suggestion: outcome.suggestion,
        submission_id: outcome.submission_id,
        model_version: outcome.model_version,
        screening: outcome.screening,
    }))
}
