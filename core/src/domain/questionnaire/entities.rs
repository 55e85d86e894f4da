use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    questionnaire::scoring::ScreeningResult,
};

/// Name of the label column in training data.
pub const TARGET_COLUMN: &str = "depression";

/// Identifier stored when a submission carries no `user_id`.
pub const UNKNOWN_USER: &str = "unknown";

const USER_ID_KEY: &str = "user_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionnaireField {
    Mood,
    Sleep,
    Energy,
    Appetite,
    Interest,
    Irritability,
    Concentration,
    FeelingWorthy,
    AnxiousThoughts,
    PanicAttacks,
    Stress,
    Anxiety,
}

impl QuestionnaireField {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionnaireField::Mood => "mood",
            QuestionnaireField::Sleep => "sleep",
            QuestionnaireField::Energy => "energy",
            QuestionnaireField::Appetite => "appetite",
            QuestionnaireField::Interest => "interest",
            QuestionnaireField::Irritability => "irritability",
            QuestionnaireField::Concentration => "concentration",
            QuestionnaireField::FeelingWorthy => "feelingWorthy",
            QuestionnaireField::AnxiousThoughts => "anxiousThoughts",
            QuestionnaireField::PanicAttacks => "panicAttacks",
            QuestionnaireField::Stress => "stress",
            QuestionnaireField::Anxiety => "anxiety",
        }
    }
}

impl fmt::Display for QuestionnaireField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const STANDARD_FIELDS: [QuestionnaireField; 10] = [
    QuestionnaireField::Mood,
    QuestionnaireField::Sleep,
    QuestionnaireField::Energy,
    QuestionnaireField::Appetite,
    QuestionnaireField::Interest,
    QuestionnaireField::Irritability,
    QuestionnaireField::Concentration,
    QuestionnaireField::FeelingWorthy,
    QuestionnaireField::AnxiousThoughts,
    QuestionnaireField::PanicAttacks,
];

const EXTENDED_FIELDS: [QuestionnaireField; 12] = [
    QuestionnaireField::Mood,
    QuestionnaireField::Sleep,
    QuestionnaireField::Energy,
    QuestionnaireField::Appetite,
    QuestionnaireField::Interest,
    QuestionnaireField::Irritability,
    QuestionnaireField::Concentration,
    QuestionnaireField::FeelingWorthy,
    QuestionnaireField::AnxiousThoughts,
    QuestionnaireField::PanicAttacks,
    QuestionnaireField::Stress,
    QuestionnaireField::Anxiety,
];

/// Ordered set of fields a model is trained on and queried with.
///
/// The order returned by [`FeatureSchema::fields`] is the feature vector
/// layout, shared by the trainer and the encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSchema {
    #[default]
    Standard,
    Extended,
}

impl FeatureSchema {
    pub fn fields(&self) -> &'static [QuestionnaireField] {
        match self {
            FeatureSchema::Standard => &STANDARD_FIELDS,
            FeatureSchema::Extended => &EXTENDED_FIELDS,
        }
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields().iter().map(|f| f.as_str().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Whether predictions come with a suggestion text.
    pub fn offers_suggestions(&self) -> bool {
        matches!(self, FeatureSchema::Extended)
    }
}

/// One questionnaire submission, validated against a [`FeatureSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireResponse {
    pub user_id: String,
    answers: BTreeMap<QuestionnaireField, String>,
    raw: Map<String, Value>,
}

impl QuestionnaireResponse {
    /// Validates an untrusted JSON object.
    ///
    /// Every schema field must be present and non-null. Strings are kept
    /// verbatim (categories match exactly, whitespace included), numbers and
    /// booleans are stringified, nested values are rejected.
    pub fn from_payload(payload: Map<String, Value>, schema: FeatureSchema) -> Result<Self, CoreError> {
        let missing: Vec<String> = schema
            .fields()
            .iter()
            .filter(|field| matches!(payload.get(field.as_str()), None | Some(Value::Null)))
            .map(|field| field.as_str().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::MissingFields(missing));
        }

        let mut answers = BTreeMap::new();
        for field in schema.fields() {
            let value = match &payload[field.as_str()] {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(CoreError::invalid_field(
                        field.as_str(),
                        "expected a categorical string",
                    ));
                }
            };
            answers.insert(*field, value);
        }

        let user_id = match payload.get(USER_ID_KEY) {
            Some(Value::String(id)) if !id.trim().is_empty() => id.trim().to_string(),
            Some(Value::Number(id)) => id.to_string(),
            _ => UNKNOWN_USER.to_string(),
        };

        Ok(Self {
            user_id,
            answers,
            raw: payload,
        })
    }

    pub fn answer(&self, field: QuestionnaireField) -> Option<&str> {
        self.answers.get(&field).map(String::as_str)
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn into_raw(self) -> Map<String, Value> {
        self.raw
    }
}

/// Fixed-order integer encoding of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFeatureVector {
    values: Vec<i64>,
}

impl EncodedFeatureVector {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Raw questionnaire document, stored as submitted, with the rule-based
/// screening computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredResponse {
    pub id: Uuid,
    pub user_id: String,
    #[schema(value_type = Object)]
    pub payload: Value,
    pub screening: Option<ScreeningResult>,
    pub created_at: DateTime<Utc>,
}

impl StoredResponse {
    pub fn new(
        submission_id: Uuid,
        user_id: String,
        payload: Value,
        screening: ScreeningResult,
    ) -> Self {
        Self {
            id: submission_id,
            user_id,
            payload,
            screening: Some(screening),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub user_id: String,
    #[schema(value_type = Object)]
    pub features: Value,
    pub prediction: Vec<String>,
    pub suggestion: Option<String>,
    pub model_version: u64,
    pub training_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

pub struct PredictionRecordConfig {
    pub submission_id: Uuid,
    pub user_id: String,
    pub features: Value,
    pub label: String,
    pub suggestion: Option<String>,
    pub model_version: u64,
    pub training_id: Option<Uuid>,
}

impl PredictionRecord {
    pub fn new(config: PredictionRecordConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            submission_id: config.submission_id,
            user_id: config.user_id,
            features: config.features,
            prediction: vec![config.label],
            suggestion: config.suggestion,
            model_version: config.model_version,
            training_id: config.training_id,
            created_at: now,
        }
    }
}
