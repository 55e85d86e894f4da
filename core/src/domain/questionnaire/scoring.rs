use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    journal::entities::RiskLevel,
    questionnaire::entities::{QuestionnaireField, QuestionnaireResponse},
};

/// Points awarded for specific answers to one field. Any other answer
/// scores 0; matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerPoints {
    field: QuestionnaireField,
    points: Vec<(String, u32)>,
}

impl AnswerPoints {
    pub fn new<I, S>(field: QuestionnaireField, points: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            field,
            points: points.into_iter().map(|(answer, p)| (answer.into(), p)).collect(),
        }
    }

    fn score(&self, response: &QuestionnaireResponse) -> u32 {
        let Some(answer) = response.answer(self.field) else {
            return 0;
        };
        self.points
            .iter()
            .find(|(expected, _)| expected == answer)
            .map_or(0, |(_, points)| *points)
    }
}

/// Sum of the answer points of one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRule {
    answers: Vec<AnswerPoints>,
}

impl DimensionRule {
    pub fn new(answers: Vec<AnswerPoints>) -> Self {
        Self { answers }
    }

    pub fn score(&self, response: &QuestionnaireResponse) -> u32 {
        self.answers.iter().map(|a| a.score(response)).sum()
    }
}

/// Score above `high_above` is High, above `moderate_above` is Moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreThresholds {
    pub high_above: u32,
    pub moderate_above: u32,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            high_above: 5,
            moderate_above: 2,
        }
    }
}

impl ScoreThresholds {
    pub fn level(&self, score: u32) -> RiskLevel {
        if score > self.high_above {
            RiskLevel::High
        } else if score > self.moderate_above {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningSolutions {
    pub low: String,
    pub moderate: String,
    pub high: String,
}

impl Default for ScreeningSolutions {
    fn default() -> Self {
        Self {
            low: "You're doing well! Continue practicing self-care and managing your stress with positive activities.".to_string(),
            moderate: "You're managing okay, but consider introducing more relaxation techniques or talking to someone you trust.".to_string(),
            high: "It's important to seek support. Consider professional help or talking to someone who can guide you through coping strategies.".to_string(),
        }
    }
}

impl ScreeningSolutions {
    pub fn select(&self, level: RiskLevel) -> &str {
        match level {
            RiskLevel::Low => &self.low,
            RiskLevel::Moderate => &self.moderate,
            RiskLevel::High => &self.high,
        }
    }
}

/// Rule-based stress, anxiety and depression levels computed from the
/// answers alone, next to the model's prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub stress_score: u32,
    pub anxiety_score: u32,
    pub depression_score: u32,
    pub stress_level: RiskLevel,
    pub anxiety_level: RiskLevel,
    pub depression_level: RiskLevel,
    pub stress_solution: String,
    pub anxiety_solution: String,
    pub depression_solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireScorer {
    pub stress: DimensionRule,
    pub anxiety: DimensionRule,
    pub depression: DimensionRule,
    pub thresholds: ScoreThresholds,
    pub solutions: ScreeningSolutions,
}

impl Default for QuestionnaireScorer {
    fn default() -> Self {
        use QuestionnaireField::*;

        Self {
            stress: DimensionRule::new(vec![
                AnswerPoints::new(Mood, [("Very Low", 3), ("Low", 2), ("Neutral", 1)]),
                AnswerPoints::new(Sleep, [("Very Poor", 3), ("Poor", 2), ("Neutral", 1)]),
            ]),
            anxiety: DimensionRule::new(vec![
                AnswerPoints::new(
                    AnxiousThoughts,
                    [("Very Often", 3), ("Sometimes", 2), ("Rarely", 1)],
                ),
                AnswerPoints::new(PanicAttacks, [("Yes", 3)]),
            ]),
            depression: DimensionRule::new(vec![
                AnswerPoints::new(Interest, [("Yes, Completely", 3), ("Somewhat", 2)]),
                AnswerPoints::new(FeelingWorthy, [("Very Often", 3), ("Sometimes", 2)]),
            ]),
            thresholds: ScoreThresholds::default(),
            solutions: ScreeningSolutions::default(),
        }
    }
}

impl QuestionnaireScorer {
    pub fn score(&self, response: &QuestionnaireResponse) -> ScreeningResult {
        let stress_score = self.stress.score(response);
        let anxiety_score = self.anxiety.score(response);
        let depression_score = self.depression.score(response);

        let stress_level = self.thresholds.level(stress_score);
        let anxiety_level = self.thresholds.level(anxiety_score);
        let depression_level = self.thresholds.level(depression_score);

        ScreeningResult {
            stress_score,
            anxiety_score,
            depression_score,
            stress_level,
            anxiety_level,
            depression_level,
            stress_solution: self.solutions.select(stress_level).to_string(),
            anxiety_solution: self.solutions.select(anxiety_level).to_string(),
            depression_solution: self.solutions.select(depression_level).to_string(),
        }
    }
}
