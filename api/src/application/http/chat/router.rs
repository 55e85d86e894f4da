use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::store_chat::{__path_store_chat, store_chat};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(store_chat))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/store_chat", state.args.server.root_path),
        post(store_chat),
    )
}
