use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

/// Chat transcript of any shape; stored as sent.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct StoreChatValidator {
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub payload: Map<String, Value>,
}
