use axum::extract::State;
use mindscope_core::domain::chat::ports::ChatService;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::http::chat::validators::StoreChatValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StoreChatResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/store_chat",
    tag = "chat",
    summary = "Store a chat transcript",
    request_body = StoreChatValidator,
    responses(
        (status = 200, body = StoreChatResponse)
    ),
)]
pub async fn store_chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<StoreChatValidator>,
) -> Result<Response<StoreChatResponse>, ApiError> {
    state
        .service
        .store_chat(Value::Object(payload.payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(StoreChatResponse {
        message: "Chat stored successfully".to_string(),
    }))
}
