use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError, encoding::FieldEncoders, model::TrainedModel,
    training::ports::ArtifactStore,
};

/// Immutable view of the model state a request works against.
#[derive(Debug, Clone, Default)]
pub struct ModelSnapshot {
    pub version: u64,
    pub model: Option<TrainedModel>,
    pub encoders: FieldEncoders,
}

impl ModelSnapshot {
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }
}

/// Holds the current [`ModelSnapshot`].
///
/// Readers clone the `Arc` and keep using it for the whole request; a retrain
/// builds a fresh snapshot and swaps it in under the write lock.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    current: RwLock<Arc<ModelSnapshot>>,
}

impl ModelRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(model: Option<TrainedModel>, encoders: FieldEncoders) -> Self {
        let registry = Self::empty();
        registry.publish(model, encoders);
        registry
    }

    /// Builds the registry from whatever the artifact store returned.
    ///
    /// Encoders written by a different training run than the model are
    /// discarded; the affected fields fall back to the static table.
    pub fn from_artifacts(loaded: Option<(TrainedModel, FieldEncoders)>) -> Self {
        match loaded {
            Some((model, mut encoders)) => {
                let stale = encoders.retain_run(model.training_id);
                if !stale.is_empty() {
                    warn!(
                        training_id = %model.training_id,
                        columns = ?stale,
                        "ignoring encoders from another training run"
                    );
                }
                Self::new(Some(model), encoders)
            }
            None => {
                warn!("no trained model found, predictions are unavailable until retrain");
                Self::empty()
            }
        }
    }

    pub fn load<A: ArtifactStore>(store: &A) -> Result<Self, CoreError> {
        store.load().map(Self::from_artifacts)
    }

    pub fn snapshot(&self) -> Arc<ModelSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn publish(&self, model: Option<TrainedModel>, encoders: FieldEncoders) -> Arc<ModelSnapshot> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let snapshot = Arc::new(ModelSnapshot {
            version: current.version + 1,
            model,
            encoders,
        });
        *current = snapshot.clone();

        info!(
            version = snapshot.version,
            training_id = ?snapshot.model.as_ref().map(|m| m.training_id),
            encoders = snapshot.encoders.len(),
            "model snapshot published"
        );

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_has_no_model() {
        let registry = ModelRegistry::empty();
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.version, 0);
        assert!(!snapshot.is_loaded());
    }

    #[test]
    fn test_publish_bumps_version_and_keeps_old_snapshots_intact() {
        let registry = ModelRegistry::new(None, FieldEncoders::new());
        let before = registry.snapshot();
        assert_eq!(before.version, 1);

        let after = registry.publish(None, FieldEncoders::new());

        assert_eq!(after.version, 2);
        assert_eq!(registry.snapshot().version, 2);
        assert_eq!(before.version, 1);
    }

    #[test]
    fn test_from_artifacts_drops_encoders_of_other_runs() {
        use uuid::Uuid;

        use crate::domain::{
            encoding::FieldEncoder, questionnaire::entities::FeatureSchema, training::Trainer,
            training::trainer::tests::sample_dataset, training::value_objects::TrainingConfig,
        };

        let outcome = Trainer::new(FeatureSchema::Standard, TrainingConfig::default())
            .train(&sample_dataset(FeatureSchema::Standard))
            .unwrap();
        let mut encoders = outcome.encoders.clone();
        encoders.insert(FieldEncoder::fit("mood", Uuid::from_u128(99), ["Bad", "Good"]));

        let registry = ModelRegistry::from_artifacts(Some((outcome.model.clone(), encoders)));
        let snapshot = registry.snapshot();

        assert!(snapshot.is_loaded());
        assert!(snapshot.encoders.get("mood").is_none());
        assert!(snapshot.encoders.get("sleep").is_some());
    }

    #[test]
    fn test_from_missing_artifacts_is_empty() {
        let registry = ModelRegistry::from_artifacts(None);
        assert!(!registry.snapshot().is_loaded());
    }

    #[test]
    fn test_load_propagates_store_errors() {
        use crate::domain::training::ports::MockArtifactStore;

        let mut store = MockArtifactStore::new();
        store
            .expect_load()
            .times(1)
            .returning(|| Err(CoreError::ArtifactError("model.json: truncated".to_string())));

        let err = ModelRegistry::load(&store).unwrap_err();
        assert!(matches!(err, CoreError::ArtifactError(_)));
    }

    #[test]
    fn test_load_without_artifacts_starts_empty() {
        use crate::domain::training::ports::MockArtifactStore;

        let mut store = MockArtifactStore::new();
        store.expect_load().returning(|| Ok(None));

        let registry = ModelRegistry::load(&store).unwrap();
        assert_eq!(registry.snapshot().version, 0);
    }
}
