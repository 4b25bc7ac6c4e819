//! Default paths and pipeline constants.
//!
//! These mirror the repository's on-disk layout: raw data under `data/`,
//! trained artifacts under `artifacts/`. Every path can be overridden from
//! the CLI; the defaults exist so `newsline ingest && newsline train` works
//! out of the box.

use std::path::{Path, PathBuf};

/// Default raw dataset location (JSON or JSONL).
pub const RAW_DATA_PATH: &str = "data/raw_dataset.json";

/// Default processed dataset location (CSV).
pub const PROCESSED_DATA_PATH: &str = "data/dataset.csv";

/// Default artifacts directory.
pub const ARTIFACTS_DIR: &str = "artifacts";

/// Column name for article text in the processed dataset.
pub const TEXT_COLUMN: &str = "text";

/// Column name for the category label in the processed dataset.
pub const LABEL_COLUMN: &str = "category";

/// Fraction of the dataset held out for evaluation.
pub const TEST_FRACTION: f64 = 0.2;

/// Seed for the stratified train/test split.
pub const SPLIT_SEED: u64 = 42;

/// Locations of the persisted training artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    /// Serialized fitted vectorizer.
    pub vectorizer: PathBuf,
    /// Serialized fitted classifier.
    pub model: PathBuf,
    /// Plain-text evaluation report.
    pub report: PathBuf,
}

impl ArtifactPaths {
    /// Standard artifact layout under the given directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        ArtifactPaths {
            vectorizer: dir.join("vectorizer.bin"),
            model: dir.join("model.bin"),
            report: dir.join("classification_report.txt"),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        ArtifactPaths::in_dir(ARTIFACTS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_paths_layout() {
        let paths = ArtifactPaths::in_dir("out");
        assert_eq!(paths.vectorizer, PathBuf::from("out/vectorizer.bin"));
        assert_eq!(paths.model, PathBuf::from("out/model.bin"));
        assert_eq!(paths.report, PathBuf::from("out/classification_report.txt"));
    }
}
