use axum::extract::State;
use mindscope_core::domain::diagnostics::{entities::MemoryUsage, ports::DiagnosticsService};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/memory",
    tag = "diagnostics",
    summary = "Process memory usage",
    description = "Resident and virtual memory of the API process in MB.",
    responses(
        (status = 200, body = MemoryUsage)
    ),
)]
pub async fn get_memory(State(state): State<AppState>) -> Result<Response<MemoryUsage>, ApiError> {
    let usage = state.service.memory_usage().map_err(ApiError::from)?;

    Ok(Response::OK(usage))
}
