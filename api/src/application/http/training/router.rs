use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::retrain::{__path_retrain, retrain};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(retrain))]
pub struct TrainingApiDoc;

pub fn training_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/retrain", state.args.server.root_path),
        post(retrain),
    )
}
