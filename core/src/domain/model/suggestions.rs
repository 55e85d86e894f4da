use std::collections::HashMap;

pub const GENERIC_SUGGESTION: &str = "No solution available.";

/// Advice text keyed on a predicted label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTable {
    entries: HashMap<String, String>,
    default: String,
}

impl SuggestionTable {
    pub fn new<I, K, V>(entries: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            default: default.into(),
        }
    }

    pub fn suggest(&self, label: &str) -> &str {
        self.entries.get(label).unwrap_or(&self.default)
    }
}

impl Default for SuggestionTable {
    fn default() -> Self {
        Self::new(
            [
                (
                    "Low",
                    "You're doing well! Continue practicing self-care and managing your stress with positive activities.",
                ),
                (
                    "Moderate",
                    "You're managing okay, but consider introducing more relaxation techniques or talking to someone you trust.",
                ),
                (
                    "High",
                    "It's important to seek support. Consider professional help or talking to someone who can guide you through coping strategies.",
                ),
            ],
            GENERIC_SUGGESTION,
        )
    }
}
