use crate::domain::journal::{
    entities::{JournalRiskLevels, JournalTags, Mood, RiskLevel},
    lexicon::{AdvisoryTable, JournalLexicon, KeywordSet, QuickLexicon},
};

/// Rule-based analyzer behind `/journal-analyze`.
///
/// Any keyword hit in a dimension marks it `High`, otherwise `Low`.
#[derive(Debug, Clone, Default)]
pub struct JournalTagger {
    lexicon: JournalLexicon,
    advice: AdvisoryTable,
}

impl JournalTagger {
    pub fn new(lexicon: JournalLexicon, advice: AdvisoryTable) -> Self {
        Self { lexicon, advice }
    }

    pub fn tag(&self, text: &str) -> JournalTags {
        let text = text.to_lowercase();

        let mood = if self.lexicon.happy.matches(&text) {
            Mood::Happy
        } else if self.lexicon.sad.matches(&text) {
            Mood::Sad
        } else if self.lexicon.anxious.matches(&text) {
            Mood::Anxious
        } else {
            Mood::Neutral
        };

        JournalTags {
            mood,
            stress: binary_level(&self.lexicon.stress, &text),
            anxiety: binary_level(&self.lexicon.anxiety, &text),
            depression: binary_level(&self.lexicon.depression, &text),
        }
    }

    pub fn advice(&self) -> &AdvisoryTable {
        &self.advice
    }
}

fn binary_level(set: &KeywordSet, text: &str) -> RiskLevel {
    if set.matches(text) {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

/// Count-based tagger behind `/predict_journal`, configured independently of
/// [`JournalTagger`].
#[derive(Debug, Clone, Default)]
pub struct QuickJournalTagger {
    lexicon: QuickLexicon,
}

impl QuickJournalTagger {
    pub fn new(lexicon: QuickLexicon) -> Self {
        Self { lexicon }
    }

    pub fn tag(&self, text: &str) -> JournalRiskLevels {
        let text = text.to_lowercase();
        let calm = self.lexicon.calm.count(&text);

        JournalRiskLevels {
            stress: self.level(&self.lexicon.stress, &text, calm),
            anxiety: self.level(&self.lexicon.anxiety, &text, calm),
            depression: self.level(&self.lexicon.depression, &text, calm),
        }
    }

    fn level(&self, set: &KeywordSet, text: &str, calm: usize) -> RiskLevel {
        let score = set.count(text).saturating_sub(calm);
        if score >= self.lexicon.high_threshold {
            RiskLevel::High
        } else if score >= self.lexicon.moderate_threshold {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_priority_happy_before_sad() {
        let tagger = JournalTagger::default();
        assert_eq!(tagger.tag("Happy but also a bit SAD").mood, Mood::Happy);
        assert_eq!(tagger.tag("feeling down and worried").mood, Mood::Sad);
        assert_eq!(tagger.tag("So worried about tomorrow").mood, Mood::Anxious);
        assert_eq!(tagger.tag("Went to the market").mood, Mood::Neutral);
    }

    #[test]
    fn test_exhausted_marks_stress_high() {
        let tags = JournalTagger::default().tag("I am completely EXHAUSTED after work");
        assert_eq!(tags.stress, RiskLevel::High);
        assert_eq!(tags.anxiety, RiskLevel::Low);
        assert_eq!(tags.depression, RiskLevel::Low);
    }

    #[test]
    fn test_dimensions_are_independent() {
        let tags = JournalTagger::default().tag("nervous and hopeless");
        assert_eq!(tags.stress, RiskLevel::Low);
        assert_eq!(tags.anxiety, RiskLevel::High);
        assert_eq!(tags.depression, RiskLevel::High);
    }

    #[test]
    fn test_quick_tagger_thresholds() {
        let tagger = QuickJournalTagger::default();
        let levels = tagger.tag("Deadline pressure, I can't stop to worry");
        assert_eq!(levels.stress, RiskLevel::High);
        assert_eq!(levels.anxiety, RiskLevel::Moderate);
        assert_eq!(levels.depression, RiskLevel::Low);
    }

    #[test]
    fn test_quick_tagger_calm_words_offset_risk() {
        let levels = QuickJournalTagger::default().tag("Busy deadline week but I feel calm and rested");
        assert_eq!(levels.stress, RiskLevel::Low);
    }

    #[test]
    fn test_taggers_can_disagree() {
        let text = "so exhausted today";
        assert_eq!(JournalTagger::default().tag(text).stress, RiskLevel::High);
        assert_eq!(QuickJournalTagger::default().tag(text).stress, RiskLevel::Low);
    }
}
