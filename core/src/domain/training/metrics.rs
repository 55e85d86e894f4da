use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub support: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AverageMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub support: usize,
}

/// Per-class precision, recall and F1 over a held-out split.
///
/// Undefined ratios (no predictions or no support for a class) are reported
/// as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_avg: AverageMetrics,
    pub weighted_avg: AverageMetrics,
}

pub fn accuracy(actual: &[usize], predicted: &[usize]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let correct = actual
        .iter()
        .zip(predicted)
        .filter(|(a, p)| a == p)
        .count();
    correct as f64 / actual.len() as f64
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl ClassificationReport {
    pub fn compute(labels: &[String], actual: &[usize], predicted: &[usize]) -> Self {
        let n_classes = labels.len();
        let mut true_positive = vec![0usize; n_classes];
        let mut predicted_count = vec![0usize; n_classes];
        let mut support = vec![0usize; n_classes];

        for (a, p) in actual.iter().zip(predicted) {
            support[*a] += 1;
            predicted_count[*p] += 1;
            if a == p {
                true_positive[*a] += 1;
            }
        }

        // Classes absent from both sides of the split are left out, as they
        // carry no information about this evaluation.
        let classes: Vec<ClassMetrics> = (0..n_classes)
            .filter(|class| support[*class] > 0 || predicted_count[*class] > 0)
            .map(|class| {
                let precision = ratio(true_positive[class], predicted_count[class]);
                let recall = ratio(true_positive[class], support[class]);
                let f1_score = if precision + recall == 0.0 {
                    0.0
                } else {
                    2.0 * precision * recall / (precision + recall)
                };
                ClassMetrics {
                    label: labels[class].clone(),
                    precision,
                    recall,
                    f1_score,
                    support: support[class],
                }
            })
            .collect();

        let total_support: usize = classes.iter().map(|c| c.support).sum();
        let count = classes.len().max(1) as f64;

        let macro_avg = AverageMetrics {
            precision: classes.iter().map(|c| c.precision).sum::<f64>() / count,
            recall: classes.iter().map(|c| c.recall).sum::<f64>() / count,
            f1_score: classes.iter().map(|c| c.f1_score).sum::<f64>() / count,
            support: total_support,
        };

        let weight = |value: fn(&ClassMetrics) -> f64| {
            if total_support == 0 {
                return 0.0;
            }
            classes
                .iter()
                .map(|c| value(c) * c.support as f64)
                .sum::<f64>()
                / total_support as f64
        };

        let weighted_avg = AverageMetrics {
            precision: weight(|c| c.precision),
            recall: weight(|c| c.recall),
            f1_score: weight(|c| c.f1_score),
            support: total_support,
        };

        Self {
            accuracy: accuracy(actual, predicted),
            classes,
            macro_avg,
            weighted_avg,
        }
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|c| c.label.len())
            .chain(["weighted avg".len()])
            .max()
            .unwrap_or(12);

        writeln!(
            f,
            "{:>width$} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for c in &self.classes {
            writeln!(
                f,
                "{:>width$} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                c.label, c.precision, c.recall, c.f1_score, c.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        for (name, avg) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>width$} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                name, avg.precision, avg.recall, avg.f1_score, avg.support
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["High".to_string(), "Low".to_string(), "Moderate".to_string()]
    }

    #[test]
    fn test_perfect_predictions() {
        let actual = vec![0, 1, 2, 1];
        let report = ClassificationReport::compute(&labels(), &actual, &actual);

        assert_eq!(report.accuracy, 1.0);
        assert!(report.classes.iter().all(|c| c.f1_score == 1.0));
        assert_eq!(report.macro_avg.support, 4);
    }

    #[test]
    fn test_mixed_predictions() {
        let actual = vec![0, 0, 1, 1];
        let predicted = vec![0, 1, 1, 1];
        let report = ClassificationReport::compute(&labels(), &actual, &predicted);

        assert_eq!(report.accuracy, 0.75);
        assert_eq!(report.classes.len(), 2);

        let high = &report.classes[0];
        assert_eq!(high.precision, 1.0);
        assert_eq!(high.recall, 0.5);

        let low = &report.classes[1];
        assert!((low.precision - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(low.recall, 1.0);
    }

    #[test]
    fn test_renders_table() {
        let actual = vec![0, 1];
        let rendered = ClassificationReport::compute(&labels(), &actual, &actual).to_string();
        assert!(rendered.contains("precision"));
        assert!(rendered.contains("weighted avg"));
        assert!(rendered.contains("High"));
    }
}
