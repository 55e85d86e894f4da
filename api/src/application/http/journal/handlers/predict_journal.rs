use axum::extract::State;
use mindscope_core::domain::journal::{entities::JournalRiskLevels, ports::JournalService};

use crate::application::http::journal::validators::PredictJournalValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/predict_journal",
    tag = "journal",
    summary = "Quick journal tagging",
    description = "Scores stress, anxiety and depression from keyword counts. Nothing is stored.",
    request_body = PredictJournalValidator,
    responses(
        (status = 200, body = JournalRiskLevels)
    ),
)]
pub async fn predict_journal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PredictJournalValidator>,
) -> Result<Response<JournalRiskLevels>, ApiError> {
    let levels = state
        .service
        .tag_journal(payload.content)
        .map_err(ApiError::from)?;

    Ok(Response::OK(levels))
}
