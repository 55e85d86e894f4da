use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Model not loaded")]
    ModelUnavailable,

    #[error("Model was trained on features {trained:?} but the active schema expects {expected:?}")]
    ModelSchemaMismatch {
        trained: Vec<String>,
        expected: Vec<String>,
    },

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Artifact error: {0}")]
    ArtifactError(String),

    #[error("Persistence failed: {0}")]
    PersistenceFailed(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
