use axum::extract::State;
use mindscope_core::domain::training::{ports::TrainingService, value_objects::RetrainOutcome};

use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/retrain",
    tag = "training",
    summary = "Retrain the classifier",
    description = "Fits new encoders and a new forest on the configured dataset, writes the artifacts and swaps the live model. Requests already running keep the previous model.",
    responses(
        (status = 200, body = RetrainOutcome),
        (status = 400, description = "Dataset does not match the feature schema", body = ApiErrorResponse),
        (status = 404, description = "Dataset file not found", body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn retrain(State(state): State<AppState>) -> Result<Response<RetrainOutcome>, ApiError> {
    let outcome = state.service.retrain().await.map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
