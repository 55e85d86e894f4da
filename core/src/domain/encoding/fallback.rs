use std::collections::HashMap;

/// Static label-to-integer table used for fields without a trained encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTable {
    entries: HashMap<String, i64>,
}

impl FallbackTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, value)| (label.into(), value))
                .collect(),
        }
    }

    /// Unknown labels map to 0.
    pub fn lookup(&self, label: &str) -> i64 {
        self.get(label).unwrap_or(0)
    }

    pub fn get(&self, label: &str) -> Option<i64> {
        self.entries.get(label).copied()
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new([
            ("Low", 1),
            ("Moderate", 2),
            ("High", 3),
            ("Neutral", 3),
            ("Somewhat", 2),
            ("Normal", 3),
            ("Somewhat Irritable", 2),
            ("Sometimes", 2),
            ("No", 0),
        ])
    }
}
