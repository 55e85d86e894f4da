use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::get_predictions::{__path_get_predictions, get_predictions};
use super::handlers::submit_questionnaire::{__path_submit_questionnaire, submit_questionnaire};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(submit_questionnaire, get_predictions))]
pub struct QuestionnaireApiDoc;

pub fn questionnaire_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/submit", state.args.server.root_path),
            post(submit_questionnaire),
        )
        .route(
            &format!("{}/get_predictions/{{user_id}}", state.args.server.root_path),
            get(get_predictions),
        )
}
