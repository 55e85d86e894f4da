use chrono::{TimeZone, Utc};

use crate::domain::chat::entities::ChatMessage;
use crate::entity::chat_history::Model as ChatHistoryModel;

impl From<ChatHistoryModel> for ChatMessage {
    fn from(model: ChatHistoryModel) -> Self {
        ChatMessage {
            id: model.id,
            payload: model.payload,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}
