#![allow(dead_code)]

use std::{fs, path::PathBuf, sync::Arc};

use axum_test::TestServer;
use chrono::Utc;
use clap::Parser;
use mindscope_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use mindscope_core::{
    application::build_service,
    domain::{
        common::ModelConfig,
        questionnaire::entities::FeatureSchema,
        training::{Trainer, ports::ArtifactStore, ports::DatasetSource},
    },
    entity::{journal_entries, predictions, questionnaire_responses, chat_history},
    infrastructure::{artifacts::FileArtifactStore, dataset::CsvDatasetSource},
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::{Value, json};
use tempfile::TempDir;
use test_context::AsyncTestContext;
use uuid::Uuid;

const MOODS: [&str; 3] = ["Good", "Neutral", "Bad"];

/// Temporary artifacts directory and dataset for one test.
pub struct ApiContext {
    pub dir: TempDir,
    pub extended: bool,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let context = Self {
            dir,
            extended: false,
        };
        context.write_dataset(FeatureSchema::Standard);
        context
    }
}

impl ApiContext {
    pub fn artifacts_dir(&self) -> PathBuf {
        self.dir.path().join("artifacts")
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.dir.path().join("questionnaire.csv")
    }

    pub fn args(&self) -> Args {
        let mut argv = vec![
            "mindscope-api".to_string(),
            "--metrics".to_string(),
            "false".to_string(),
            "--artifacts-dir".to_string(),
            self.artifacts_dir().display().to_string(),
            "--dataset-path".to_string(),
            self.dataset_path().display().to_string(),
            "--n-estimators".to_string(),
            "15".to_string(),
        ];
        if self.extended {
            argv.push("--extended-features".to_string());
        }
        Args::try_parse_from(argv).expect("valid test arguments")
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::from(&self.args().model)
    }

    /// Writes a labelled CSV whose label follows `mood` and `panicAttacks`.
    pub fn write_dataset(&self, schema: FeatureSchema) {
        let mut lines = vec![format!("{},depression", schema.field_names().join(","))];
        for i in 0..60 {
            let mood = MOODS[i % 3];
            let panic = if i % 2 == 0 { "Yes" } else { "No" };
            let label = match (mood, panic) {
                ("Bad", "Yes") => "High",
                ("Good", "No") => "Low",
                _ => "Moderate",
            };
            let cells: Vec<String> = schema
                .fields()
                .iter()
                .map(|field| match field.as_str() {
                    "mood" => mood.to_string(),
                    "panicAttacks" => panic.to_string(),
                    "sleep" => (if i % 5 == 0 { "Poorly" } else { "Well" }).to_string(),
                    _ => "Normal".to_string(),
                })
                .collect();
            lines.push(format!("{},{}", cells.join(","), label));
        }
        fs::write(self.dataset_path(), lines.join("\n")).expect("write dataset");
    }

    /// Trains on the dataset and writes artifacts, as `mindscope-train` does.
    pub fn train(&self) {
        let config = self.model_config();
        let dataset = CsvDatasetSource::new(config.dataset_path.clone())
            .load()
            .expect("dataset");
        let outcome = Trainer::new(config.schema, config.training.clone())
            .train(&dataset)
            .expect("training");
        FileArtifactStore::new(config.artifacts_dir.clone())
            .save(&outcome.model, &outcome.encoders)
            .expect("save artifacts");
    }

    pub fn server(&self, db: DatabaseConnection) -> TestServer {
        let args = Arc::new(self.args());
        let service = build_service(db, &ModelConfig::from(&args.model)).expect("service");
        let app = router(AppState::new(args, service)).expect("router");
        TestServer::new(app).expect("test server")
    }
}

pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

/// Database that accepts one questionnaire submission.
pub fn submission_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![response_row("patient-1")]])
        .append_query_results([vec![prediction_row("patient-1", "High")]])
        .into_connection()
}

pub fn standard_answers() -> Value {
    json!({
        "user_id": "patient-1",
        "mood": "Bad",
        "sleep": "Poorly",
        "energy": "Normal",
        "appetite": "Normal",
        "interest": "Normal",
        "irritability": "Normal",
        "concentration": "Normal",
        "feelingWorthy": "Normal",
        "anxiousThoughts": "Normal",
        "panicAttacks": "Yes"
    })
}

pub fn response_row(user_id: &str) -> questionnaire_responses::Model {
    questionnaire_responses::Model {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        payload: standard_answers(),
        screening: None,
        created_at: Utc::now().naive_utc(),
    }
}

pub fn prediction_row(user_id: &str, label: &str) -> predictions::Model {
    predictions::Model {
        id: Uuid::new_v4(),
        submission_id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        features: standard_answers(),
        prediction: json!([label]),
        suggestion: None,
        model_version: 1,
        training_id: Some(Uuid::new_v4()),
        created_at: Utc::now().naive_utc(),
    }
}

pub fn journal_row(text: &str) -> journal_entries::Model {
    journal_entries::Model {
        id: Uuid::new_v4(),
        text: text.to_string(),
        mood: "Neutral".to_string(),
        stress_level: "Low".to_string(),
        anxiety_level: "Low".to_string(),
        depression_level: "Low".to_string(),
        mood_solution: String::new(),
        stress_solution: String::new(),
        anxiety_solution: String::new(),
        depression_solution: String::new(),
        created_at: Utc::now().naive_utc(),
    }
}

pub fn chat_row() -> chat_history::Model {
    chat_history::Model {
        id: Uuid::new_v4(),
        payload: json!({}),
        created_at: Utc::now().naive_utc(),
    }
}
