use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJournalValidator {
    #[validate(length(min = 1, message = "journalContent is required"))]
    pub journal_content: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PredictJournalValidator {
    /// Empty content is allowed and tags every dimension `Low`.
    #[serde(default)]
    pub content: String,
}
