use crate::domain::{
    common::entities::app_errors::CoreError,
    encoding::FieldEncoders,
    model::TrainedModel,
    training::{Dataset, value_objects::RetrainOutcome},
};

/// Where trained artifacts live between process restarts.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactStore: Send + Sync {
    /// Replaces every stored artifact with the given run.
    fn save(&self, model: &TrainedModel, encoders: &FieldEncoders) -> Result<(), CoreError>;

    /// `Ok(None)` when no model has been trained yet.
    fn load(&self) -> Result<Option<(TrainedModel, FieldEncoders)>, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<Dataset, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait TrainingService: Send + Sync {
    fn retrain(&self) -> impl Future<Output = Result<RetrainOutcome, CoreError>> + Send;
}
