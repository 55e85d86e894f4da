use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_memory::{__path_get_memory, get_memory};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_memory))]
pub struct DiagnosticsApiDoc;

pub fn diagnostics_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/memory", state.args.server.root_path),
        get(get_memory),
    )
}
