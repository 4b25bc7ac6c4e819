//! TF-IDF vectorizer for text feature extraction.
//!
//! The vectorizer is fitted on the training split only, then applied to any
//! text at evaluation and inference time. Defaults follow the training
//! recipe this crate ships with: unigrams plus bigrams, a 100k-term
//! vocabulary cap, English stop words, sublinear term frequency, and
//! L2-normalized output vectors.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::WordTokenizer;
use crate::error::{NewslineError, Result};
use crate::features::SparseVector;

/// Configuration for [`TfIdfVectorizer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Inclusive n-gram range; `(1, 2)` emits unigrams and bigrams.
    pub ngram_range: (usize, usize),
    /// Keep only this many terms, ranked by corpus frequency.
    pub max_features: Option<usize>,
    /// Apply `1 + ln(count)` instead of the raw term count.
    pub sublinear_tf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            ngram_range: (1, 2),
            max_features: Some(100_000),
            sublinear_tf: true,
        }
    }
}

/// TF-IDF vectorizer over word n-grams.
#[derive(Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Configuration used at fit time.
    config: VectorizerConfig,
    /// Vocabulary: term -> feature index.
    vocabulary: HashMap<String, u32>,
    /// Inverse document frequency, indexed by feature index.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Tokenizer, rebuilt on deserialization (regexes do not serialize).
    #[serde(skip, default)]
    tokenizer: WordTokenizer,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(VectorizerConfig::default())
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new(config: VectorizerConfig) -> Self {
        TfIdfVectorizer {
            config,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            tokenizer: WordTokenizer::default(),
        }
    }

    /// Fit the vocabulary and IDF table on training documents.
    ///
    /// Terms are ranked by total corpus count when the vocabulary cap
    /// applies; feature indices are assigned in lexicographic term order so
    /// fitting is deterministic.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(NewslineError::model(
                "Cannot fit vectorizer on an empty corpus",
            ));
        }

        self.n_documents = documents.len();

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut corpus_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = self.terms(doc);
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for term in &terms {
                *counts.entry(term.as_str()).or_insert(0) += 1;
            }
            for (term, count) in counts {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
                *corpus_frequency.entry(term.to_string()).or_insert(0) += count;
            }
        }

        let mut terms: Vec<String> = corpus_frequency.keys().cloned().collect();
        if let Some(cap) = self.config.max_features {
            if terms.len() > cap {
                // Highest corpus count first, term order breaks ties.
                terms.sort_by(|a, b| {
                    corpus_frequency[b]
                        .cmp(&corpus_frequency[a])
                        .then_with(|| a.cmp(b))
                });
                terms.truncate(cap);
            }
        }
        terms.sort();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = vec![0.0; terms.len()];
        for (idx, term) in terms.into_iter().enumerate() {
            let df = document_frequency[&term];
            // Smoothed IDF: ln((1 + N) / (1 + df)) + 1
            idf[idx] = ((1.0 + self.n_documents as f64) / (1.0 + df as f64)).ln() + 1.0;
            vocabulary.insert(term, idx as u32);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        info!(
            "Fitted TF-IDF vectorizer: {} documents, {} terms",
            self.n_documents,
            self.vocabulary.len()
        );
        Ok(())
    }

    /// Transform a document into an L2-normalized sparse TF-IDF vector.
    ///
    /// Terms outside the fitted vocabulary are ignored; a document with no
    /// known terms transforms to the empty vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<u32, f64> = BTreeMap::new();
        for term in self.terms(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(u32, f64)> = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if self.config.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (idx, tf * self.idf[idx as usize])
            })
            .collect();

        let norm: f64 = entries.iter().map(|&(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in &mut entries {
                *value /= norm;
            }
        }

        SparseVector::from_sorted(entries)
    }

    /// Tokenize a document and expand n-grams per the configured range.
    fn terms(&self, document: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(document);
        let (min_n, max_n) = self.config.ngram_range;
        let mut terms = Vec::new();

        for n in min_n..=max_n {
            if n == 0 || n > tokens.len() {
                continue;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }

        terms
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether `fit` has been called.
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Serialize the fitted vectorizer to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = bincode::serialize(self)
            .map_err(|e| NewslineError::artifact(format!("Failed to serialize vectorizer: {e}")))?;
        fs::write(path, bytes)?;

        info!("Vectorizer saved to: {}", path.display());
        Ok(())
    }

    /// Load a fitted vectorizer from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            NewslineError::artifact(format!("Failed to read vectorizer {}: {e}", path.display()))
        })?;

        bincode::deserialize(&bytes).map_err(|e| {
            NewslineError::artifact(format!(
                "Failed to deserialize vectorizer {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "stocks rally on strong earnings".to_string(),
            "parliament passes education reform".to_string(),
            "team wins championship final".to_string(),
        ]
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();
        assert!(vectorizer.is_fitted());
        // "on" is a stop word: 4 tokens per document, so 12 distinct
        // unigrams plus 9 distinct bigrams.
        assert_eq!(vectorizer.vocabulary_size(), 21);
    }

    #[test]
    fn test_fit_empty_corpus_fails() {
        let mut vectorizer = TfIdfVectorizer::default();
        assert!(vectorizer.fit(&[]).is_err());
    }

    #[test]
    fn test_transform_is_normalized() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();

        let vector = vectorizer.transform("stocks rally on earnings");
        assert!(!vector.is_empty());
        assert!((vector.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_unknown_terms_empty() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();

        let vector = vectorizer.transform("zebra quagga okapi");
        assert!(vector.is_empty());
    }

    #[test]
    fn test_transform_deterministic() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();

        let a = vectorizer.transform("stocks rally");
        let b = vectorizer.transform("stocks rally");
        assert_eq!(a, b);
    }

    #[test]
    fn test_bigrams_emitted() {
        let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig {
            ngram_range: (1, 2),
            max_features: None,
            sublinear_tf: false,
        });
        vectorizer
            .fit(&["stocks rally".to_string(), "stocks fall".to_string()])
            .unwrap();

        // "stocks", "rally", "fall", "stocks rally", "stocks fall"
        assert_eq!(vectorizer.vocabulary_size(), 5);
    }

    #[test]
    fn test_max_features_cap() {
        let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig {
            ngram_range: (1, 1),
            max_features: Some(2),
            sublinear_tf: true,
        });
        vectorizer
            .fit(&[
                "apple apple banana".to_string(),
                "apple banana cherry".to_string(),
            ])
            .unwrap();

        // "apple" (3) and "banana" (2) survive the cap, "cherry" does not.
        assert_eq!(vectorizer.vocabulary_size(), 2);
        assert!(vectorizer.transform("cherry").is_empty());
        assert!(!vectorizer.transform("apple").is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectorizer.bin");

        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();
        let expected = vectorizer.transform("stocks rally on earnings");

        vectorizer.save(&path).unwrap();
        let loaded = TfIdfVectorizer::load(&path).unwrap();

        assert_eq!(loaded.vocabulary_size(), vectorizer.vocabulary_size());
        assert_eq!(loaded.transform("stocks rally on earnings"), expected);
    }
}
