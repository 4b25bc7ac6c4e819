//! Feature extraction: TF-IDF vectors over article text.
//!
//! [`TfIdfVectorizer`](vectorizer::TfIdfVectorizer) turns cleaned text into
//! sparse, L2-normalized TF-IDF vectors. Vectors are sparse because the
//! vocabulary is capped at 100k terms while a single article touches only a
//! handful of them.

pub mod vectorizer;

use serde::{Deserialize, Serialize};

pub use vectorizer::{TfIdfVectorizer, VectorizerConfig};

/// A sparse feature vector: `(feature index, value)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    /// Non-zero entries, ascending by feature index.
    pub entries: Vec<(u32, f64)>,
}

impl SparseVector {
    /// Create a vector from entries already sorted by index.
    pub fn from_sorted(entries: Vec<(u32, f64)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        SparseVector { entries }
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vector has no non-zero entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product against a dense weight slice.
    ///
    /// Indices beyond the slice contribute nothing, so a vector produced by
    /// one vocabulary is safe (if meaningless) against a smaller one.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(idx, value)| dense.get(idx as usize).map(|w| w * value))
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, value)| value * value)
            .sum::<f64>()
            .sqrt()
    }
}
