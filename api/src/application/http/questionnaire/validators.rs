use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

/// Questionnaire answers keyed by field name, plus an optional `user_id`.
///
/// Required fields are checked against the active feature schema by the
/// service, so the body is accepted as any JSON object here.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "user_id": "patient-42",
    "mood": "Low",
    "sleep": "Poorly",
    "energy": "Low",
    "appetite": "Normal",
    "interest": "Somewhat",
    "irritability": "Somewhat Irritable",
    "concentration": "Moderate",
    "feelingWorthy": "No",
    "anxiousThoughts": "Sometimes",
    "panicAttacks": "No"
}))]
pub struct SubmitQuestionnaireValidator {
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub answers: Map<String, Value>,
}
