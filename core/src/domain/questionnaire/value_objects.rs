use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::questionnaire::scoring::ScreeningResult;

#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireInput {
    pub payload: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionOutcome {
    pub submission_id: Uuid,
    pub prediction: Vec<String>,
    pub suggestion: Option<String>,
    pub model_version: u64,
    pub screening: ScreeningResult,
}
