use chrono::{TimeZone, Utc};

use crate::domain::journal::entities::{JournalAnalysis, Mood, RiskLevel};
use crate::entity::journal_entries::Model as JournalEntryModel;

impl From<JournalEntryModel> for JournalAnalysis {
    fn from(model: JournalEntryModel) -> Self {
        JournalAnalysis {
            id: model.id,
            text: model.text,
            mood: Mood::from(model.mood.as_str()),
            stress_level: RiskLevel::from(model.stress_level.as_str()),
            anxiety_level: RiskLevel::from(model.anxiety_level.as_str()),
            depression_level: RiskLevel::from(model.depression_level.as_str()),
            mood_solution: model.mood_solution,
            stress_solution: model.stress_solution,
            anxiety_solution: model.anxiety_solution,
            depression_solution: model.depression_solution,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}
