use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Neutral => "Neutral",
        }
    }
}

impl From<&str> for Mood {
    fn from(s: &str) -> Self {
        match s {
            "Happy" => Mood::Happy,
            "Sad" => Mood::Sad,
            "Anxious" => Mood::Anxious,
            _ => Mood::Neutral,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl From<&str> for RiskLevel {
    fn from(s: &str) -> Self {
        match s {
            "High" => RiskLevel::High,
            "Moderate" => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the journal analyzer before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalTags {
    pub mood: Mood,
    pub stress: RiskLevel,
    pub anxiety: RiskLevel,
    pub depression: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalAnalysis {
    pub id: Uuid,
    pub text: String,
    pub mood: Mood,
    pub stress_level: RiskLevel,
    pub anxiety_level: RiskLevel,
    pub depression_level: RiskLevel,
    pub mood_solution: String,
    pub stress_solution: String,
    pub anxiety_solution: String,
    pub depression_solution: String,
    pub created_at: DateTime<Utc>,
}

pub struct JournalAnalysisConfig {
    pub text: String,
    pub tags: JournalTags,
    pub mood_solution: String,
    pub stress_solution: String,
    pub anxiety_solution: String,
    pub depression_solution: String,
}

impl JournalAnalysis {
    pub fn new(config: JournalAnalysisConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            text: config.text,
            mood: config.tags.mood,
            stress_level: config.tags.stress,
            anxiety_level: config.tags.anxiety,
            depression_level: config.tags.depression,
            mood_solution: config.mood_solution,
            stress_solution: config.stress_solution,
            anxiety_solution: config.anxiety_solution,
            depression_solution: config.depression_solution,
            created_at: now,
        }
    }
}

/// Output of the quick tagger; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JournalRiskLevels {
    pub stress: RiskLevel,
    pub anxiety: RiskLevel,
    pub depression: RiskLevel,
}
