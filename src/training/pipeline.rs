//! The training pipeline: CSV dataset to persisted artifacts.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::analysis::clean_text;
use crate::config::{ArtifactPaths, PROCESSED_DATA_PATH, SPLIT_SEED, TEST_FRACTION};
use crate::error::{NewslineError, Result};
use crate::evaluation::{accuracy, classification_report, confusion_matrix};
use crate::features::{SparseVector, TfIdfVectorizer, VectorizerConfig};
use crate::ingestion::load_dataset;
use crate::models::{ClassifierConfig, LogisticRegression};
use crate::taxonomy::map_training_category;
use crate::training::split::stratified_split;

/// Configuration for a training run.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Processed CSV dataset to train on.
    pub dataset_path: PathBuf,
    /// Where to write the fitted artifacts and report.
    pub artifacts: ArtifactPaths,
    /// Vectorizer hyperparameters.
    pub vectorizer: VectorizerConfig,
    /// Classifier hyperparameters.
    pub classifier: ClassifierConfig,
    /// Fraction held out for evaluation.
    pub test_fraction: f64,
    /// Seed for the stratified split.
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            dataset_path: PathBuf::from(PROCESSED_DATA_PATH),
            artifacts: ArtifactPaths::default(),
            vectorizer: VectorizerConfig::default(),
            classifier: ClassifierConfig::default(),
            test_fraction: TEST_FRACTION,
            seed: SPLIT_SEED,
        }
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Held-out accuracy.
    pub accuracy: f64,
    /// Training-split size.
    pub n_train: usize,
    /// Test-split size.
    pub n_test: usize,
    /// Classes the model was trained on.
    pub classes: Vec<String>,
    /// The rendered classification report.
    pub report_text: String,
}

/// Orchestrates load → clean → split → fit → evaluate → persist.
#[derive(Debug, Clone)]
pub struct TrainingPipeline {
    config: TrainingConfig,
}

impl TrainingPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        TrainingPipeline { config }
    }

    /// Run the full training sequence and return a summary.
    pub fn run(&self) -> Result<TrainingReport> {
        let articles = load_dataset(&self.config.dataset_path)?;

        // Clean text and re-map categories through the training table.
        // Rows the table cannot place are dropped, not bucketed.
        let mut texts = Vec::new();
        let mut labels = Vec::new();
        let mut dropped = 0usize;
        for article in &articles {
            let cleaned = clean_text(&article.text);
            match map_training_category(&article.category) {
                Some(label) if !cleaned.is_empty() => {
                    texts.push(cleaned);
                    labels.push(label.to_string());
                }
                _ => dropped += 1,
            }
        }
        if dropped > 0 {
            warn!("Dropped {dropped} rows with unmapped categories or empty text");
        }

        let mut distribution: BTreeMap<&str, usize> = BTreeMap::new();
        for label in &labels {
            *distribution.entry(label.as_str()).or_insert(0) += 1;
        }
        info!("Class distribution after mapping: {distribution:?}");

        if labels.is_empty() {
            return Err(NewslineError::ingestion(
                "No trainable rows after category mapping",
            ));
        }

        let (train_idx, test_idx) =
            stratified_split(&labels, self.config.test_fraction, self.config.seed);
        info!(
            "Stratified split: {} train / {} test",
            train_idx.len(),
            test_idx.len()
        );

        let train_texts: Vec<String> = train_idx.iter().map(|&i| texts[i].clone()).collect();
        let train_labels: Vec<String> = train_idx.iter().map(|&i| labels[i].clone()).collect();
        let test_labels: Vec<String> = test_idx.iter().map(|&i| labels[i].clone()).collect();

        // The vectorizer sees the training split only.
        let mut vectorizer = TfIdfVectorizer::new(self.config.vectorizer.clone());
        vectorizer.fit(&train_texts)?;

        let x_train: Vec<SparseVector> = train_texts
            .iter()
            .map(|text| vectorizer.transform(text))
            .collect();
        let x_test: Vec<SparseVector> = test_idx
            .iter()
            .map(|&i| vectorizer.transform(&texts[i]))
            .collect();

        let mut model = LogisticRegression::new(self.config.classifier.clone());
        model.fit(&x_train, &train_labels, vectorizer.vocabulary_size())?;

        let predictions: Vec<String> = x_test
            .iter()
            .map(|features| model.predict(features))
            .collect::<Result<_>>()?;

        let acc = accuracy(&test_labels, &predictions);
        let report_text = classification_report(&test_labels, &predictions);
        let (matrix_labels, matrix) = confusion_matrix(&test_labels, &predictions);

        info!("Accuracy: {acc:.4}");
        info!("Confusion matrix labels: {matrix_labels:?}");
        for (label, row) in matrix_labels.iter().zip(&matrix) {
            info!("  {label}: {row:?}");
        }

        self.write_report(&report_text, acc)?;
        vectorizer.save(&self.config.artifacts.vectorizer)?;
        model.save(&self.config.artifacts.model)?;
        info!("Model and vectorizer saved");

        Ok(TrainingReport {
            accuracy: acc,
            n_train: train_idx.len(),
            n_test: test_idx.len(),
            classes: model.classes().to_vec(),
            report_text,
        })
    }

    fn write_report(&self, report_text: &str, acc: f64) -> Result<()> {
        let path = &self.config.artifacts.report;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, format!("{report_text}\nAccuracy: {acc}\n"))?;
        info!("Classification report written to: {}", path.display());
        Ok(())
    }
}
