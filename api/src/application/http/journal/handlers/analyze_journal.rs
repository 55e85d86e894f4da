use axum::extract::State;
use mindscope_core::domain::journal::{entities::JournalAnalysis, ports::JournalService};

use crate::application::http::journal::validators::AnalyzeJournalValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/journal-analyze",
    tag = "journal",
    summary = "Analyze and store a journal entry",
    description = "Tags mood, stress, anxiety and depression from keywords, attaches advice for each and stores the analysis.",
    request_body = AnalyzeJournalValidator,
    responses(
        (status = 200, body = JournalAnalysis),
        (status = 400, description = "Empty journal content", body = ApiErrorResponse),
    ),
)]
pub async fn analyze_journal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeJournalValidator>,
) -> Result<Response<JournalAnalysis>, ApiError> {
    let analysis = state
        .service
        .analyze_journal(payload.journal_content)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
