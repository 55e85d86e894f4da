use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::analyze_journal::{__path_analyze_journal, analyze_journal};
use super::handlers::get_journal_entries::{__path_get_journal_entries, get_journal_entries};
use super::handlers::predict_journal::{__path_predict_journal, predict_journal};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_journal, get_journal_entries, predict_journal))]
pub struct JournalApiDoc;

pub fn journal_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/journal-analyze", state.args.server.root_path),
            post(analyze_journal),
        )
        .route(
            &format!("{}/journal", state.args.server.root_path),
            get(get_journal_entries),
        )
        .route(
            &format!("{}/predict_journal", state.args.server.root_path),
            post(predict_journal),
        )
}
