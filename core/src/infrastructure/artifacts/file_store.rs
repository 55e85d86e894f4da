use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    encoding::{FieldEncoder, FieldEncoders},
    model::TrainedModel,
    training::ports::ArtifactStore,
};

const MODEL_FILE: &str = "model.json";
const ENCODER_DIR: &str = "label_encoders";
const ENCODER_SUFFIX: &str = "_label_encoder.json";

/// One save or load at a time across every store in the process, so a
/// `model.json` is never paired with encoders from another run.
static ARTIFACTS_LOCK: Mutex<()> = Mutex::new(());

/// Stores the classifier and its encoders as JSON files:
///
/// ```text
/// <dir>/model.json
/// <dir>/label_encoders/<column>_label_encoder.json
/// ```
#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    dir: PathBuf,
}

impl FileArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    fn encoder_dir(&self) -> PathBuf {
        self.dir.join(ENCODER_DIR)
    }

    fn encoder_path(&self, column: &str) -> PathBuf {
        self.encoder_dir().join(format!("{column}{ENCODER_SUFFIX}"))
    }

    fn load_encoders(&self) -> Result<FieldEncoders, CoreError> {
        let dir = self.encoder_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FieldEncoders::new()),
            Err(e) => return Err(artifact_error(&dir, e)),
        };

        let mut encoders = FieldEncoders::new();
        for entry in entries {
            let path = entry.map_err(|e| artifact_error(&dir, e))?.path();
            let is_encoder = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(ENCODER_SUFFIX));
            if !is_encoder {
                continue;
            }

            match read_json::<FieldEncoder>(&path) {
                Ok(encoder) => encoders.insert(encoder),
                Err(e) => warn!(path = %path.display(), "skipping unreadable encoder: {}", e),
            }
        }

        Ok(encoders)
    }

    fn remove_stale_encoders(&self, keep: &FieldEncoders) -> Result<(), CoreError> {
        let dir = self.encoder_dir();
        for entry in fs::read_dir(&dir).map_err(|e| artifact_error(&dir, e))? {
            let path = entry.map_err(|e| artifact_error(&dir, e))?.path();
            let Some(column) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_suffix(ENCODER_SUFFIX))
            else {
                continue;
            };

            if keep.get(column).is_none() {
                debug!(path = %path.display(), "removing stale encoder");
                fs::remove_file(&path).map_err(|e| artifact_error(&path, e))?;
            }
        }
        Ok(())
    }
}

impl ArtifactStore for FileArtifactStore {
    fn save(&self, model: &TrainedModel, encoders: &FieldEncoders) -> Result<(), CoreError> {
        let _guard = ARTIFACTS_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let encoder_dir = self.encoder_dir();
        fs::create_dir_all(&encoder_dir).map_err(|e| artifact_error(&encoder_dir, e))?;

        for encoder in encoders.iter() {
            write_json(&self.encoder_path(&encoder.column), encoder)?;
        }
        self.remove_stale_encoders(encoders)?;

        // Model last: a reader never sees a model without its encoders.
        write_json(&self.model_path(), model)?;

        info!(
            dir = %self.dir.display(),
            training_id = %model.training_id,
            encoders = encoders.len(),
            "model artifacts saved"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<(TrainedModel, FieldEncoders)>, CoreError> {
        let _guard = ARTIFACTS_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let model_path = self.model_path();
        if !model_path.exists() {
            return Ok(None);
        }

        let model = read_json::<TrainedModel>(&model_path)?;
        let encoders = self.load_encoders()?;

        info!(
            training_id = %model.training_id,
            encoders = encoders.len(),
            "model artifacts loaded"
        );
        Ok(Some((model, encoders)))
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CoreError> {
    let bytes = serde_json::to_vec(value).map_err(|e| artifact_error(path, e))?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| artifact_error(dir, e))?;
    tmp.write_all(&bytes)
        .map_err(|e| artifact_error(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| artifact_error(path, e.error))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let bytes = fs::read(path).map_err(|e| artifact_error(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| artifact_error(path, e))
}

fn artifact_error(path: &Path, err: impl std::fmt::Display) -> CoreError {
    error!(path = %path.display(), "artifact i/o failed: {}", err);
    CoreError::ArtifactError(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        questionnaire::entities::FeatureSchema,
        training::{Trainer, trainer::tests::sample_dataset, value_objects::TrainingConfig},
    };

    fn trained() -> (TrainedModel, FieldEncoders) {
        let outcome = Trainer::new(
            FeatureSchema::Standard,
            TrainingConfig {
                n_estimators: 5,
                ..TrainingConfig::default()
            },
        )
        .train(&sample_dataset(FeatureSchema::Standard))
        .unwrap();
        (outcome.model, outcome.encoders)
    }

    #[test]
    fn test_empty_directory_has_no_model() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileArtifactStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_saved_artifacts_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileArtifactStore::new(dir.path());
        let (model, encoders) = trained();

        store.save(&model, &encoders).unwrap();

        assert!(dir.path().join("model.json").exists());
        assert!(dir.path().join("label_encoders/mood_label_encoder.json").exists());
        assert!(dir.path().join("label_encoders/depression_label_encoder.json").exists());

        let (loaded_model, loaded_encoders) = store.load().unwrap().unwrap();
        assert_eq!(loaded_model, model);
        assert_eq!(loaded_encoders, encoders);
    }

    #[test]
    fn test_save_removes_encoders_of_previous_runs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileArtifactStore::new(dir.path());
        let (model, encoders) = trained();
        fs::create_dir_all(dir.path().join(ENCODER_DIR)).unwrap();
        fs::write(
            dir.path().join("label_encoders/retired_label_encoder.json"),
            b"{}",
        )
        .unwrap();

        store.save(&model, &encoders).unwrap();

        assert!(!dir.path().join("label_encoders/retired_label_encoder.json").exists());
    }

    #[test]
    fn test_concurrent_saves_never_mix_runs() {
        let dir = tempfile::tempdir().unwrap();

        for _ in 0..10 {
            let handles: Vec<_> = (0..2)
                .map(|_| {
                    let store = FileArtifactStore::new(dir.path());
                    std::thread::spawn(move || {
                        let (model, encoders) = trained();
                        store.save(&model, &encoders)
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap().unwrap();
            }

            let (model, encoders) = FileArtifactStore::new(dir.path()).load().unwrap().unwrap();
            assert!(!encoders.is_empty());
            assert!(encoders.iter().all(|e| e.training_id == model.training_id));
        }

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .chain(fs::read_dir(dir.path().join(ENCODER_DIR)).unwrap())
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name != "model.json" && name != ENCODER_DIR && !name.ends_with(ENCODER_SUFFIX))
            .collect();
        assert!(leftovers.is_empty(), "temporary files left behind: {leftovers:?}");
    }

    #[test]
    fn test_corrupt_model_is_an_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("model.json"), b"not json").unwrap();

        let err = FileArtifactStore::new(dir.path()).load().unwrap_err();

        assert!(matches!(err, CoreError::ArtifactError(_)));
    }
}
