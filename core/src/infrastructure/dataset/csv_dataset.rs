use std::{fs::File, path::PathBuf};

use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    training::{Dataset, ports::DatasetSource},
};

/// Labelled questionnaire data read from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self) -> Result<Dataset, CoreError> {
        if !self.path.is_file() {
            error!(path = %self.path.display(), "dataset not found");
            return Err(CoreError::DatasetNotFound(self.path.display().to_string()));
        }

        let file = File::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), "Failed to open dataset: {}", e);
            CoreError::DatasetNotFound(self.path.display().to_string())
        })?;

        let dataset = Dataset::from_reader(file)?;
        info!(
            path = %self.path.display(),
            rows = dataset.len(),
            columns = dataset.headers().len(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_file_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvDatasetSource::new(dir.path().join("absent.csv"));

        assert!(matches!(source.load(), Err(CoreError::DatasetNotFound(_))));
    }

    #[test]
    fn test_reads_trimmed_cells() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mood, sleep ,depression").unwrap();
        writeln!(file, "Good, Well ,Low").unwrap();
        writeln!(file, "Bad,Poorly, High").unwrap();

        let dataset = CsvDatasetSource::new(file.path()).load().unwrap();

        assert_eq!(dataset.headers(), &["mood", "sleep", "depression"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.column("sleep").unwrap(), vec!["Well", "Poorly"]);
    }

    #[test]
    fn test_ragged_rows_are_a_schema_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mood,depression").unwrap();
        writeln!(file, "Good").unwrap();

        let err = CsvDatasetSource::new(file.path()).load().unwrap_err();

        assert!(matches!(err, CoreError::SchemaError(_)));
    }
}
