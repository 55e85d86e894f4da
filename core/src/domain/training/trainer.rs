use std::collections::BTreeSet;

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    encoding::{FieldEncoder, FieldEncoders, numeric_value},
    model::{RandomForest, TrainedModel},
    questionnaire::entities::{FeatureSchema, TARGET_COLUMN},
    training::{
        Dataset,
        metrics::ClassificationReport,
        value_objects::{TrainingConfig, TrainingReport},
    },
};

/// Everything a training run produces.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub model: TrainedModel,
    pub encoders: FieldEncoders,
    pub report: TrainingReport,
}

#[derive(Debug, Clone)]
pub struct Trainer {
    schema: FeatureSchema,
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(schema: FeatureSchema, config: TrainingConfig) -> Self {
        Self { schema, config }
    }

    pub fn train(&self, dataset: &Dataset) -> Result<TrainingOutcome, CoreError> {
        self.check_columns(dataset)?;

        if dataset.len() < 2 {
            return Err(CoreError::SchemaError(format!(
                "dataset has {} rows, at least 2 are needed to hold out a test split",
                dataset.len()
            )));
        }

        let (trained_at, timestamp) = generate_timestamp();
        let training_id = Uuid::new_v7(timestamp);

        let mut encoders = FieldEncoders::new();
        let mut numeric_features = BTreeSet::new();
        let mut columns = Vec::with_capacity(self.schema.len());
        for field in self.schema.fields() {
            let name = field.as_str();
            let values = dataset
                .column(name)
                .ok_or_else(|| CoreError::SchemaError(format!("missing feature column '{name}'")))?;
            let (encoded, encoder) = encode_column(name, training_id, &values);
            match encoder {
                Some(encoder) => encoders.insert(encoder),
                None => {
                    numeric_features.insert(name.to_string());
                }
            }
            columns.push(encoded);
        }

        let target_values = dataset
            .column(TARGET_COLUMN)
            .ok_or_else(|| CoreError::SchemaError(format!("missing target column '{TARGET_COLUMN}'")))?;
        let target_encoder = FieldEncoder::fit(TARGET_COLUMN, training_id, target_values.iter().copied());
        let targets: Vec<usize> = target_values
            .iter()
            .map(|value| {
                target_encoder
                    .transform(value)
                    .map(|class| class as usize)
                    .ok_or(CoreError::InternalServerError)
            })
            .collect::<Result<_, _>>()?;
        let labels = target_encoder.classes().to_vec();

        let samples: Vec<Vec<i64>> = (0..dataset.len())
            .map(|row| columns.iter().map(|column| column[row]).collect())
            .collect();

        let (train_rows, test_rows) = self.split(samples.len());
        debug!(
            train = train_rows.len(),
            test = test_rows.len(),
            "dataset split"
        );

        let pick = |rows: &[usize]| -> (Vec<Vec<i64>>, Vec<usize>) {
            rows.iter()
                .map(|row| (samples[*row].clone(), targets[*row]))
                .unzip()
        };
        let (train_x, train_y) = pick(&train_rows);
        let (test_x, test_y) = pick(&test_rows);

        let forest = RandomForest::fit(&train_x, &train_y, labels.len(), &self.config.forest_params())?;

        let predicted: Vec<usize> = test_x.iter().map(|sample| forest.predict(sample)).collect();
        let classification_report = ClassificationReport::compute(&labels, &test_y, &predicted);

        let encoded_columns = encoders.iter().map(|e| e.column.clone()).collect();
        encoders.insert(target_encoder);

        let report = TrainingReport {
            training_id,
            trained_at,
            accuracy: classification_report.accuracy,
            train_size: train_rows.len(),
            test_size: test_rows.len(),
            encoded_columns,
            classification_report,
        };

        info!(
            training_id = %training_id,
            accuracy = report.accuracy,
            train_size = report.train_size,
            test_size = report.test_size,
            "model trained"
        );

        Ok(TrainingOutcome {
            model: TrainedModel {
                training_id,
                trained_at,
                feature_names: self.schema.field_names(),
                labels,
                numeric_features,
                forest,
            },
            encoders,
            report,
        })
    }

    fn check_columns(&self, dataset: &Dataset) -> Result<(), CoreError> {
        let missing: Vec<&str> = self
            .schema
            .fields()
            .iter()
            .map(|field| field.as_str())
            .filter(|name| !dataset.has_column(name))
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::SchemaError(format!(
                "missing features in dataset: {}",
                missing.join(", ")
            )));
        }

        if !dataset.has_column(TARGET_COLUMN) {
            return Err(CoreError::SchemaError(format!(
                "'{TARGET_COLUMN}' column (label) not found in dataset"
            )));
        }

        Ok(())
    }

    /// Seeded shuffle, then the first `ceil(n * test_size)` rows form the
    /// test split.
    fn split(&self, n: usize) -> (Vec<usize>, Vec<usize>) {
        let mut rows: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        rows.shuffle(&mut rng);

        let n_test = ((n as f64 * self.config.test_size).ceil() as usize).clamp(1, n - 1);
        let train = rows.split_off(n_test);
        (train, rows)
    }
}

/// Numeric columns pass through (rounded); any non-numeric cell makes the
/// column categorical and gets it an encoder.
fn encode_column(name: &str, training_id: Uuid, values: &[&str]) -> (Vec<i64>, Option<FieldEncoder>) {
    let numeric: Option<Vec<i64>> = values
        .iter()
        .map(|value| numeric_value(value))
        .collect();

    if let Some(numeric) = numeric {
        return (numeric, None);
    }

    let encoder = FieldEncoder::fit(name, training_id, values.iter().copied());
    let encoded = values
        .iter()
        .map(|value| encoder.transform(value).unwrap_or(0))
        .collect();
    (encoded, Some(encoder))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small synthetic questionnaire dataset whose label follows mood and
    /// panic attacks.
    pub(crate) fn sample_dataset(schema: FeatureSchema) -> Dataset {
        let moods = ["Good", "Neutral", "Bad"];
        let mut headers = schema.field_names();
        headers.push(TARGET_COLUMN.to_string());

        let rows = (0..60)
            .map(|i| {
                let mood = moods[i % 3];
                let panic = if i % 2 == 0 { "Yes" } else { "No" };
                let label = match (mood, panic) {
                    ("Bad", "Yes") => "High",
                    ("Good", "No") => "Low",
                    _ => "Moderate",
                };
                let mut row: Vec<String> = schema
                    .fields()
                    .iter()
                    .map(|field| match field.as_str() {
                        "mood" => mood.to_string(),
                        "panicAttacks" => panic.to_string(),
                        "sleep" => (if i % 5 == 0 { "Poorly" } else { "Well" }).to_string(),
                        "energy" => ((i % 4) as i64).to_string(),
                        _ => "Normal".to_string(),
                    })
                    .collect();
                row.push(label.to_string());
                row
            })
            .collect();

        Dataset::new(headers, rows).unwrap()
    }

    #[test]
    fn test_trains_and_encodes_categorical_columns_only() {
        let outcome = Trainer::new(FeatureSchema::Standard, TrainingConfig::default())
            .train(&sample_dataset(FeatureSchema::Standard))
            .unwrap();

        assert!(outcome.encoders.get("mood").is_some());
        assert!(outcome.encoders.get("energy").is_none());
        assert_eq!(
            outcome.model.numeric_features.iter().collect::<Vec<_>>(),
            vec!["energy"]
        );
        assert!(outcome.encoders.get(TARGET_COLUMN).is_some());
        assert_eq!(outcome.model.labels, vec!["High", "Low", "Moderate"]);
        assert_eq!(outcome.model.feature_names, FeatureSchema::Standard.field_names());
        assert!(outcome.encoders.iter().all(|e| e.training_id == outcome.model.training_id));
    }

    #[test]
    fn test_split_is_eighty_twenty() {
        let outcome = Trainer::new(FeatureSchema::Standard, TrainingConfig::default())
            .train(&sample_dataset(FeatureSchema::Standard))
            .unwrap();

        assert_eq!(outcome.report.test_size, 12);
        assert_eq!(outcome.report.train_size, 48);
    }

    #[test]
    fn test_retraining_with_same_seed_is_deterministic() {
        let dataset = sample_dataset(FeatureSchema::Standard);
        let trainer = Trainer::new(FeatureSchema::Standard, TrainingConfig::default());

        let first = trainer.train(&dataset).unwrap();
        let second = trainer.train(&dataset).unwrap();

        assert_eq!(first.report.accuracy, second.report.accuracy);
        assert_eq!(first.report.classification_report, second.report.classification_report);
        assert_eq!(first.model.forest, second.model.forest);
    }

    #[test]
    fn test_missing_feature_column_is_schema_error() {
        let dataset = Dataset::new(
            vec!["mood".to_string(), TARGET_COLUMN.to_string()],
            vec![vec!["Good".to_string(), "Low".to_string()]],
        )
        .unwrap();

        let err = Trainer::new(FeatureSchema::Standard, TrainingConfig::default())
            .train(&dataset)
            .unwrap_err();

        assert!(matches!(err, CoreError::SchemaError(message) if message.contains("sleep")));
    }

    #[test]
    fn test_missing_target_column_is_schema_error() {
        let headers = FeatureSchema::Standard.field_names();
        let row = vec!["x".to_string(); headers.len()];
        let dataset = Dataset::new(headers, vec![row.clone(), row]).unwrap();

        let err = Trainer::new(FeatureSchema::Standard, TrainingConfig::default())
            .train(&dataset)
            .unwrap_err();

        assert!(matches!(err, CoreError::SchemaError(message) if message.contains(TARGET_COLUMN)));
    }

    #[test]
    fn test_extended_schema_trains_on_twelve_features() {
        let outcome = Trainer::new(FeatureSchema::Extended, TrainingConfig::default())
            .train(&sample_dataset(FeatureSchema::Extended))
            .unwrap();

        assert_eq!(outcome.model.forest.n_features(), 12);
    }
}
