use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    encoding::{FallbackTable, FieldEncoders, numeric_value},
    questionnaire::entities::{EncodedFeatureVector, FeatureSchema, QuestionnaireResponse},
};

/// What to do with a category the encoder or fallback table does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnseenCategoryPolicy {
    /// Encode as 0.
    #[default]
    Default,
    /// Fail the request with a validation error.
    Reject,
}

static NO_NUMERIC_FIELDS: BTreeSet<String> = BTreeSet::new();

/// Per field: the trained encoder if there is one, the raw number if the
/// model was trained on that column as numeric, otherwise the fallback table.
/// Anything left unresolved is handled by the [`UnseenCategoryPolicy`].
pub struct FeatureEncoder<'a> {
    schema: FeatureSchema,
    encoders: &'a FieldEncoders,
    numeric_fields: &'a BTreeSet<String>,
    fallback: &'a FallbackTable,
    policy: UnseenCategoryPolicy,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(
        schema: FeatureSchema,
        encoders: &'a FieldEncoders,
        fallback: &'a FallbackTable,
        policy: UnseenCategoryPolicy,
    ) -> Self {
        Self {
            schema,
            encoders,
            numeric_fields: &NO_NUMERIC_FIELDS,
            fallback,
            policy,
        }
    }

    pub fn with_numeric_fields(mut self, numeric_fields: &'a BTreeSet<String>) -> Self {
        self.numeric_fields = numeric_fields;
        self
    }

    pub fn encode(
        &self,
        response: &QuestionnaireResponse,
    ) -> Result<EncodedFeatureVector, CoreError> {
        let mut values = Vec::with_capacity(self.schema.len());

        for field in self.schema.fields() {
            let name = field.as_str();
            let value = response
                .answer(*field)
                .ok_or_else(|| CoreError::MissingFields(vec![name.to_string()]))?;

            let encoded = match self.encoders.get(name) {
                Some(encoder) => encoder.transform(value),
                None if self.numeric_fields.contains(name) => numeric_value(value),
                None => self.fallback.get(value),
            };

            let encoded = match (encoded, self.policy) {
                (Some(encoded), _) => encoded,
                (None, UnseenCategoryPolicy::Default) => {
                    warn!(field = name, value, "unseen category encoded as 0");
                    0
                }
                (None, UnseenCategoryPolicy::Reject) => {
                    return Err(CoreError::invalid_field(
                        name,
                        format!("unknown category '{value}'"),
                    ));
                }
            };

            values.push(encoded);
        }

        Ok(EncodedFeatureVector::new(values))
    }
}
