//! Multinomial logistic regression over sparse feature vectors.
//!
//! Trained by full-batch gradient descent on the softmax cross-entropy
//! loss. With class balancing enabled (the default), each sample is
//! weighted by `n / (k * count(class))`, so rare categories pull on the
//! gradient as hard as common ones.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{NewslineError, Result};
use crate::features::SparseVector;
use crate::models::{ModelMetadata, TrainingStats};

/// Hyperparameters for [`LogisticRegression`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Maximum number of gradient-descent epochs.
    pub max_iterations: usize,
    /// Gradient-descent step size.
    pub learning_rate: f64,
    /// Weight samples inversely to their class frequency.
    pub class_weight_balanced: bool,
    /// Stop when the loss improves by less than this between epochs.
    pub tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            max_iterations: 300,
            learning_rate: 0.5,
            class_weight_balanced: true,
            tolerance: 1e-6,
        }
    }
}

/// Multinomial (softmax) logistic regression.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Hyperparameters used at fit time.
    config: ClassifierConfig,
    /// Class labels, sorted, aligned with weight rows.
    classes: Vec<String>,
    /// Weight matrix, one row per class.
    weights: Vec<Vec<f64>>,
    /// Per-class bias terms.
    bias: Vec<f64>,
    /// Width of the weight rows.
    n_features: usize,
    /// Metadata recorded at fit time.
    metadata: Option<ModelMetadata>,
    /// Loss curve and timing from the last fit.
    stats: Option<TrainingStats>,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl LogisticRegression {
    /// Create an untrained classifier.
    pub fn new(config: ClassifierConfig) -> Self {
        LogisticRegression {
            config,
            classes: Vec::new(),
            weights: Vec::new(),
            bias: Vec::new(),
            n_features: 0,
            metadata: None,
            stats: None,
        }
    }

    /// Train on feature vectors and their labels.
    ///
    /// `n_features` is the feature-space width (the vectorizer's vocabulary
    /// size); entries beyond it would be silently ignored, so the caller
    /// passes the authoritative value instead of having it inferred.
    pub fn fit(&mut self, x: &[SparseVector], y: &[String], n_features: usize) -> Result<()> {
        if x.is_empty() {
            return Err(NewslineError::model("Cannot fit on an empty training set"));
        }
        if x.len() != y.len() {
            return Err(NewslineError::model(format!(
                "Feature/label length mismatch: {} vs {}",
                x.len(),
                y.len()
            )));
        }

        let mut classes: Vec<String> = y.to_vec();
        classes.sort();
        classes.dedup();
        if classes.len() < 2 {
            return Err(NewslineError::model(
                "Training set must contain at least two classes",
            ));
        }

        let n = x.len();
        let k = classes.len();
        let class_index: HashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();
        let y_idx: Vec<usize> = y.iter().map(|label| class_index[label.as_str()]).collect();

        let sample_weights = if self.config.class_weight_balanced {
            Self::balanced_weights(&y_idx, n, k)
        } else {
            vec![1.0; n]
        };

        let mut weights = vec![vec![0.0; n_features]; k];
        let mut bias = vec![0.0; k];

        let started = Instant::now();
        let mut losses: Vec<f64> = Vec::new();
        let mut early_stopped = false;

        for epoch in 0..self.config.max_iterations {
            let mut grad_w = vec![vec![0.0; n_features]; k];
            let mut grad_b = vec![0.0; k];
            let mut loss = 0.0;

            for (i, features) in x.iter().enumerate() {
                let probs = Self::softmax_scores(features, &weights, &bias);
                let sw = sample_weights[i];
                loss -= sw * probs[y_idx[i]].max(f64::MIN_POSITIVE).ln();

                for c in 0..k {
                    let err = sw * (probs[c] - if c == y_idx[i] { 1.0 } else { 0.0 });
                    if err == 0.0 {
                        continue;
                    }
                    grad_b[c] += err;
                    for &(idx, value) in &features.entries {
                        if (idx as usize) < n_features {
                            grad_w[c][idx as usize] += err * value;
                        }
                    }
                }
            }

            let step = self.config.learning_rate / n as f64;
            for c in 0..k {
                bias[c] -= step * grad_b[c];
                for (w, g) in weights[c].iter_mut().zip(&grad_w[c]) {
                    *w -= step * g;
                }
            }

            loss /= n as f64;
            debug!("epoch {epoch}: loss {loss:.6}");

            if let Some(&previous) = losses.last() {
                if (previous - loss).abs() < self.config.tolerance {
                    losses.push(loss);
                    early_stopped = true;
                    break;
                }
            }
            losses.push(loss);
        }

        let final_loss = losses.last().copied().unwrap_or(f64::NAN);
        self.stats = Some(TrainingStats {
            iterations: losses.len(),
            training_time_ms: started.elapsed().as_millis() as u64,
            final_training_loss: final_loss,
            early_stopped,
            training_losses: losses,
        });
        self.metadata = Some(ModelMetadata {
            name: "LogisticRegression".to_string(),
            trained_at: chrono::Utc::now(),
            training_examples: n,
            hyperparameters: HashMap::from([
                ("max_iterations".to_string(), self.config.max_iterations as f64),
                ("learning_rate".to_string(), self.config.learning_rate),
                (
                    "class_weight_balanced".to_string(),
                    if self.config.class_weight_balanced { 1.0 } else { 0.0 },
                ),
            ]),
        });

        self.classes = classes;
        self.weights = weights;
        self.bias = bias;
        self.n_features = n_features;

        info!(
            "Trained logistic regression: {} examples, {} classes, final loss {:.4}",
            n,
            self.classes.len(),
            final_loss
        );
        Ok(())
    }

    /// `n / (k * count_c)` weight for each sample's class.
    fn balanced_weights(y_idx: &[usize], n: usize, k: usize) -> Vec<f64> {
        let mut counts = vec![0usize; k];
        for &c in y_idx {
            counts[c] += 1;
        }
        y_idx
            .iter()
            .map(|&c| n as f64 / (k as f64 * counts[c] as f64))
            .collect()
    }

    fn softmax_scores(features: &SparseVector, weights: &[Vec<f64>], bias: &[f64]) -> Vec<f64> {
        let mut scores: Vec<f64> = weights
            .iter()
            .zip(bias)
            .map(|(row, b)| features.dot(row) + b)
            .collect();

        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mut sum = 0.0;
        for score in &mut scores {
            *score = (*score - max).exp();
            sum += *score;
        }
        for score in &mut scores {
            *score /= sum;
        }
        scores
    }

    /// Per-class probabilities, aligned with [`classes`](Self::classes).
    pub fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>> {
        if !self.is_trained() {
            return Err(NewslineError::model("Classifier is not trained"));
        }
        Ok(Self::softmax_scores(features, &self.weights, &self.bias))
    }

    /// Most probable class label.
    pub fn predict(&self, features: &SparseVector) -> Result<String> {
        let probs = self.predict_proba(features)?;
        let best = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap().then_with(|| b.0.cmp(&a.0)))
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        Ok(self.classes[best].clone())
    }

    /// Class labels in weight-row order (sorted).
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the model has been fitted.
    pub fn is_trained(&self) -> bool {
        !self.classes.is_empty()
    }

    /// Metadata from the last fit, if any.
    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.metadata.as_ref()
    }

    /// Training statistics from the last fit, if any.
    pub fn training_stats(&self) -> Option<&TrainingStats> {
        self.stats.as_ref()
    }

    /// Serialize the trained model to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = bincode::serialize(self)
            .map_err(|e| NewslineError::artifact(format!("Failed to serialize model: {e}")))?;
        fs::write(path, bytes)?;

        info!("Model saved to: {}", path.display());
        Ok(())
    }

    /// Load a trained model from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            NewslineError::artifact(format!("Failed to read model {}: {e}", path.display()))
        })?;

        bincode::deserialize(&bytes).map_err(|e| {
            NewslineError::artifact(format!(
                "Failed to deserialize model {}: {e}",
                path.display()
            ))
        })
    }
}
