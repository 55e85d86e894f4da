use chrono::{TimeZone, Utc};
use tracing::warn;

use crate::domain::questionnaire::entities::{PredictionRecord, StoredResponse};
use crate::entity::predictions::Model as PredictionModel;
use crate::entity::questionnaire_responses::Model as ResponseModel;

impl From<ResponseModel> for StoredResponse {
    fn from(model: ResponseModel) -> Self {
        let screening = model.screening.and_then(|value| {
            serde_json::from_value(value)
                .inspect_err(|e| warn!(id = %model.id, "unreadable screening column: {}", e))
                .ok()
        });

        StoredResponse {
            id: model.id,
            user_id: model.user_id,
            payload: model.payload,
            screening,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

impl From<PredictionModel> for PredictionRecord {
    fn from(model: PredictionModel) -> Self {
        let prediction = serde_json::from_value(model.prediction).unwrap_or_else(|e| {
            warn!(id = %model.id, "unreadable prediction column: {}", e);
            Vec::new()
        });

        PredictionRecord {
            id: model.id,
            submission_id: model.submission_id,
            user_id: model.user_id,
            features: model.features,
            prediction,
            suggestion: model.suggestion,
            model_version: u64::try_from(model.model_version).unwrap_or_default(),
            training_id: model.training_id,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}
