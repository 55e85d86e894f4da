use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category-to-integer mapping learned from one training column.
///
/// Categories are kept sorted, so the encoded value of a category is its
/// index in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEncoder {
    pub column: String,
    pub training_id: Uuid,
    classes: Vec<String>,
}

impl FieldEncoder {
    pub fn fit<'a, I>(column: impl Into<String>, training_id: Uuid, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes = values
            .into_iter()
            .map(str::to_string)
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        Self {
            column: column.into(),
            training_id,
            classes,
        }
    }

    /// Returns `None` for a category never seen during training.
    pub fn transform(&self, value: &str) -> Option<i64> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .ok()
            .map(|index| index as i64)
    }

    pub fn inverse_transform(&self, encoded: i64) -> Option<&str> {
        usize::try_from(encoded)
            .ok()
            .and_then(|index| self.classes.get(index))
            .map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Integer value of a numeric cell, rounded. Numeric columns are fed to the
/// model as-is instead of going through an encoder.
pub fn numeric_value(value: &str) -> Option<i64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i64)
}

/// The encoders of one training run, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldEncoders {
    encoders: BTreeMap<String, FieldEncoder>,
}

impl FieldEncoders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, encoder: FieldEncoder) {
        self.encoders.insert(encoder.column.clone(), encoder);
    }

    pub fn get(&self, column: &str) -> Option<&FieldEncoder> {
        self.encoders.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEncoder> {
        self.encoders.values()
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    /// Drops every encoder not produced by `training_id`.
    pub fn retain_run(&mut self, training_id: Uuid) -> Vec<String> {
        let stale: Vec<String> = self
            .encoders
            .values()
            .filter(|encoder| encoder.training_id != training_id)
            .map(|encoder| encoder.column.clone())
            .collect();

        for column in &stale {
            self.encoders.remove(column);
        }

        stale
    }
}

impl FromIterator<FieldEncoder> for FieldEncoders {
    fn from_iter<T: IntoIterator<Item = FieldEncoder>>(iter: T) -> Self {
        let mut encoders = FieldEncoders::new();
        for encoder in iter {
            encoders.insert(encoder);
        }
        encoders
    }
}
