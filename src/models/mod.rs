//! Trainable classification models.
//!
//! One model ships today: [`LogisticRegression`](classifier::LogisticRegression),
//! a multinomial softmax classifier over sparse TF-IDF vectors with optional
//! class-balanced weighting. Models carry [`ModelMetadata`] and
//! [`TrainingStats`] so a persisted artifact records how it was produced.

pub mod classifier;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use classifier::{ClassifierConfig, LogisticRegression};

/// Metadata recorded when a model is trained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier.
    pub name: String,
    /// Training timestamp.
    pub trained_at: chrono::DateTime<chrono::Utc>,
    /// Number of training examples used.
    pub training_examples: usize,
    /// Model hyperparameters.
    pub hyperparameters: HashMap<String, f64>,
}

/// Statistics collected during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Training loss per epoch.
    pub training_losses: Vec<f64>,
    /// Number of epochs completed.
    pub iterations: usize,
    /// Wall-clock training time in milliseconds.
    pub training_time_ms: u64,
    /// Loss after the final epoch.
    pub final_training_loss: f64,
    /// Whether the loss-convergence cutoff stopped training early.
    pub early_stopped: bool,
}
