use serde_json::Value;

use crate::domain::{chat::entities::ChatMessage, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn store_chat(
        &self,
        payload: Value,
    ) -> impl Future<Output = Result<ChatMessage, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChatRepository: Send + Sync {
    fn create_message(
        &self,
        message: ChatMessage,
    ) -> impl Future<Output = Result<ChatMessage, CoreError>> + Send;
}
