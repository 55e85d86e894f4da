use axum::extract::{Query, State};
use mindscope_core::domain::journal::{entities::JournalAnalysis, ports::JournalService};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetJournalEntriesQuery {
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/journal",
    tag = "journal",
    summary = "List journal analyses",
    description = "Returns stored journal analyses, newest first.",
    params(GetJournalEntriesQuery),
    responses(
        (status = 200, body = Vec<JournalAnalysis>)
    ),
)]
pub async fn get_journal_entries(
    Query(query): Query<GetJournalEntriesQuery>,
    State(state): State<AppState>,
) -> Result<Response<Vec<JournalAnalysis>>, ApiError> {
    let entries = state
        .service
        .get_journal_entries(query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(entries))
}
