use crate::domain::journal::entities::{Mood, RiskLevel};

/// Lowercased keywords matched as substrings of lowercased text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// `text` must already be lowercased.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// Number of distinct keywords found in `text` (already lowercased).
    pub fn count(&self, text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count()
    }
}

/// Word lists of the persisted journal analyzer.
///
/// Moods are tested in the order happy, sad, anxious.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLexicon {
    pub happy: KeywordSet,
    pub sad: KeywordSet,
    pub anxious: KeywordSet,
    pub stress: KeywordSet,
    pub anxiety: KeywordSet,
    pub depression: KeywordSet,
}

impl Default for JournalLexicon {
    fn default() -> Self {
        Self {
            happy: KeywordSet::new(["happy", "joy", "excited"]),
            sad: KeywordSet::new(["sad", "depressed", "down"]),
            anxious: KeywordSet::new(["anxious", "worried", "stressed"]),
            stress: KeywordSet::new([
                "stress",
                "exhausted",
                "overwhelmed",
                "pressure",
                "burnout",
                "tired",
            ]),
            anxiety: KeywordSet::new(["anxious", "anxiety", "worried", "nervous", "panic", "fear"]),
            depression: KeywordSet::new([
                "depressed",
                "hopeless",
                "worthless",
                "empty",
                "lonely",
                "sad",
            ]),
        }
    }
}

/// Word lists and thresholds of the lightweight `/predict_journal` tagger.
///
/// Each calm keyword found cancels one risk keyword in every dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLexicon {
    pub stress: KeywordSet,
    pub anxiety: KeywordSet,
    pub depression: KeywordSet,
    pub calm: KeywordSet,
    pub high_threshold: usize,
    pub moderate_threshold: usize,
}

impl Default for QuickLexicon {
    fn default() -> Self {
        Self {
            stress: KeywordSet::new(["stress", "deadline", "pressure", "overwork", "busy", "tense"]),
            anxiety: KeywordSet::new(["nervous", "panic", "worry", "fear", "uneasy", "restless"]),
            depression: KeywordSet::new(["hopeless", "empty", "numb", "worthless", "alone", "cry"]),
            calm: KeywordSet::new(["calm", "relaxed", "peaceful", "grateful", "rested", "better"]),
            high_threshold: 2,
            moderate_threshold: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelAdvice {
    pub high: String,
    pub moderate: String,
    pub low: String,
}

impl LevelAdvice {
    pub fn new(high: &str, moderate: &str, low: &str) -> Self {
        Self {
            high: high.to_string(),
            moderate: moderate.to_string(),
            low: low.to_string(),
        }
    }

    pub fn select(&self, level: RiskLevel) -> &str {
        match level {
            RiskLevel::High => &self.high,
            RiskLevel::Moderate => &self.moderate,
            RiskLevel::Low => &self.low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodAdvice {
    pub happy: String,
    pub sad: String,
    pub anxious: String,
    pub neutral: String,
}

impl MoodAdvice {
    pub fn select(&self, mood: Mood) -> &str {
        match mood {
            Mood::Happy => &self.happy,
            Mood::Sad => &self.sad,
            Mood::Anxious => &self.anxious,
            Mood::Neutral => &self.neutral,
        }
    }
}

/// Advisory texts returned alongside journal tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryTable {
    pub mood: MoodAdvice,
    pub stress: LevelAdvice,
    pub anxiety: LevelAdvice,
    pub depression: LevelAdvice,
}

impl Default for AdvisoryTable {
    fn default() -> Self {
        Self {
            mood: MoodAdvice {
                happy: "Great to hear you're feeling good! Keep doing what brings you joy.".to_string(),
                sad: "It's okay to feel down sometimes. Reach out to someone you trust and be gentle with yourself.".to_string(),
                anxious: "Try slowing down with a few deep breaths and focus on what you can control right now.".to_string(),
                neutral: "Thanks for checking in. Keep journaling to notice patterns in how you feel.".to_string(),
            },
            stress: LevelAdvice::new(
                "You seem to be under a lot of stress. Take regular breaks, rest properly and consider sharing the load with someone.",
                "Some stress is showing. Short walks and planning your day in smaller steps can help.",
                "Your stress level looks manageable. Keep balancing work and rest.",
            ),
            anxiety: LevelAdvice::new(
                "Signs of anxiety are showing. Grounding exercises and talking to a professional can help.",
                "A little worry is normal. Breathing exercises can keep it in check.",
                "No strong signs of anxiety. Keep up the habits that keep you calm.",
            ),
            depression: LevelAdvice::new(
                "You may be going through a hard time. Please consider reaching out to a mental health professional.",
                "Low moods are coming through. Staying connected with friends and routines can help.",
                "No strong signs of low mood. Keep looking after yourself.",
            ),
        }
    }
}
