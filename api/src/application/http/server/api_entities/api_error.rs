use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mindscope_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),

    /// A failed domain operation; status and code follow the error kind.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Core(err) => match err {
                CoreError::MissingFields(_)
                | CoreError::InvalidField { .. }
                | CoreError::SchemaError(_) => StatusCode::BAD_REQUEST,
                CoreError::DatasetNotFound(_) => StatusCode::NOT_FOUND,
                CoreError::ModelUnavailable
                | CoreError::ModelSchemaMismatch { .. }
                | CoreError::ArtifactError(_)
                | CoreError::PersistenceFailed(_)
                | CoreError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::InternalServerError(_) => "internal_server_error",
            ApiError::Core(err) => match err {
                CoreError::MissingFields(_) => "missing_fields",
                CoreError::InvalidField { .. } => "invalid_field",
                CoreError::ModelUnavailable => "model_unavailable",
                CoreError::ModelSchemaMismatch { .. } => "model_schema_mismatch",
                CoreError::DatasetNotFound(_) => "dataset_not_found",
                CoreError::SchemaError(_) => "schema_error",
                CoreError::ArtifactError(_) => "artifact_error",
                CoreError::PersistenceFailed(_) => "persistence_failed",
                CoreError::InternalServerError => "internal_server_error",
            },
        }
    }

    fn public_message(&self) -> String {
        match self {
            // Storage and filesystem details stay in the logs.
            ApiError::Core(CoreError::PersistenceFailed(_)) => {
                "Failed to store the result".to_string()
            }
            ApiError::Core(CoreError::ArtifactError(_)) => {
                "Failed to read or write model artifacts".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), "request failed: {}", self);
        }

        let body = ApiErrorResponse {
            error: self.public_message(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
