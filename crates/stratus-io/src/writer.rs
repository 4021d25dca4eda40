//! JSON artifact writer for split results.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use stratus_split::{SplitConfig, SplitResult};

use crate::IoError;
use crate::domain::ExperimentName;

/// Writes split results to a JSON file.
///
/// Creates the output directory on construction if it does not exist.
/// The output file is named `{experiment}_splits.json`.
pub struct SplitWriter {
    output_dir: PathBuf,
    experiment: ExperimentName,
}

impl SplitWriter {
    /// Create a new writer targeting the given directory and experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), experiment = %experiment))]
    pub fn new(output_dir: &Path, experiment: ExperimentName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            experiment,
        })
    }

    /// Write a split result to `{experiment}_splits.json`.
    ///
    /// The artifact records the configuration that produced the result (seed,
    /// target percentages) next to the per-split record-id lists, so a run can
    /// be reproduced from its artifact alone.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all)]
    pub fn write_splits(
        &self,
        config: &SplitConfig,
        result: &SplitResult,
    ) -> Result<(), IoError> {
        let path = self
            .output_dir
            .join(format!("{}_splits.json", self.experiment.as_str()));

        let splits: Vec<Vec<&str>> = result
            .splits
            .iter()
            .map(|split| split.iter().map(|id| id.as_str()).collect())
            .collect();

        let artifact = SplitsArtifact {
            experiment: self.experiment.as_str(),
            n_records: result.n_records,
            n_strata: result.n_strata,
            n_classes: result.n_classes,
            seed: config.seed(),
            target_percentages: config.percentages(),
            sizes: result.sizes(),
            shares: result.shares(),
            splits,
        };

        let json = serde_json::to_string_pretty(&artifact).expect("serialization cannot fail");
        fs::write(&path, &json).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "split result written");
        Ok(())
    }
}

// --- Shadow struct for JSON serialization ---

#[derive(Serialize)]
struct SplitsArtifact<'a> {
    experiment: &'a str,
    n_records: usize,
    n_strata: usize,
    n_classes: usize,
    seed: u64,
    target_percentages: &'a [f64],
    sizes: Vec<usize>,
    shares: Vec<f64>,
    splits: Vec<Vec<&'a str>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_frame::{Column, Frame, RowId};
    use tempfile::TempDir;

    fn test_frame() -> Frame {
        let ids = (0..10)
            .map(|i| RowId::new(format!("r{i}")).unwrap())
            .collect();
        let labels: Vec<String> = (0..10)
            .map(|i| if i < 6 { "a".to_string() } else { "b".to_string() })
            .collect();
        Frame::new(ids, vec![("class".to_string(), Column::Categorical(labels))]).unwrap()
    }

    #[test]
    fn write_splits_json_structure() {
        let dir = TempDir::new().unwrap();
        let experiment = ExperimentName::new("test_run".into()).unwrap();
        let writer = SplitWriter::new(dir.path(), experiment).unwrap();

        let config = SplitConfig::new(vec![0.8, 0.2])
            .unwrap()
            .with_class_column("class");
        let result = config.split(&test_frame()).unwrap();
        writer.write_splits(&config, &result).unwrap();

        let path = dir.path().join("test_run_splits.json");
        assert!(path.exists());

        let content: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(content["experiment"], "test_run");
        assert_eq!(content["n_records"], 10);
        assert_eq!(content["seed"], 42);
        assert_eq!(content["target_percentages"].as_array().unwrap().len(), 2);
        assert!(content["sizes"].is_array());
        assert!(content["shares"].is_array());

        let splits = content["splits"].as_array().unwrap();
        assert_eq!(splits.len(), 2);
        let total: usize = splits.iter().map(|s| s.as_array().unwrap().len()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn write_splits_creates_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("deep");
        let experiment = ExperimentName::new("nested_test".into()).unwrap();
        let writer = SplitWriter::new(&nested, experiment).unwrap();

        let config = SplitConfig::new(vec![0.5, 0.5]).unwrap();
        let result = config.split(&test_frame()).unwrap();
        writer.write_splits(&config, &result).unwrap();

        assert!(nested.join("nested_test_splits.json").exists());
    }
}
