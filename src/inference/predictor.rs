//! The predictor: trained artifacts in, top-k predictions out.

use serde::Serialize;
use tracing::info;

use crate::analysis::clean_text;
use crate::config::ArtifactPaths;
use crate::error::Result;
use crate::features::TfIdfVectorizer;
use crate::models::LogisticRegression;

/// A single prediction: primary label plus the ranked top-k list.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// The input text as submitted.
    pub text: String,
    /// Highest-probability class.
    pub label: String,
    /// Probability of the primary label.
    pub confidence: f64,
    /// `(label, probability)` pairs, descending by probability.
    pub topk: Vec<(String, f64)>,
}

/// Serves predictions from persisted artifacts.
///
/// The vectorizer and classifier are loaded once and never mutated;
/// a `Predictor` is safe to share behind an `Arc` for the lifetime of the
/// process.
#[derive(Debug)]
pub struct Predictor {
    vectorizer: TfIdfVectorizer,
    model: LogisticRegression,
}

impl Predictor {
    /// Load both artifacts from their persisted locations.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let vectorizer = TfIdfVectorizer::load(&paths.vectorizer)?;
        let model = LogisticRegression::load(&paths.model)?;
        info!(
            "Predictor ready: {} classes, {} vocabulary terms",
            model.classes().len(),
            vectorizer.vocabulary_size()
        );
        Ok(Predictor { vectorizer, model })
    }

    /// Build a predictor from already-fitted parts.
    pub fn from_parts(vectorizer: TfIdfVectorizer, model: LogisticRegression) -> Self {
        Predictor { vectorizer, model }
    }

    /// Predict the top-k most probable categories for a text.
    ///
    /// Returns `min(k, n_classes)` pairs sorted by descending probability,
    /// ties broken by label so repeated calls give identical output. The
    /// first pair is the primary prediction.
    pub fn predict_with_topk(&self, text: &str, k: usize) -> Result<Prediction> {
        let cleaned = clean_text(text);
        let features = self.vectorizer.transform(&cleaned);
        let probs = self.model.predict_proba(&features)?;

        let mut ranked: Vec<(String, f64)> = self
            .model
            .classes()
            .iter()
            .cloned()
            .zip(probs)
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(k);

        let (label, confidence) = ranked
            .first()
            .map(|(label, score)| (label.clone(), *score))
            .unwrap_or_default();

        Ok(Prediction {
            text: text.to_string(),
            label,
            confidence,
            topk: ranked,
        })
    }

    /// Predict the single most probable category.
    pub fn predict(&self, text: &str) -> Result<(String, f64)> {
        let prediction = self.predict_with_topk(text, 1)?;
        Ok((prediction.label, prediction.confidence))
    }

    /// Class labels the model can predict.
    pub fn classes(&self) -> &[String] {
        self.model.classes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{SparseVector, VectorizerConfig};
    use crate::models::ClassifierConfig;

    fn trained_predictor() -> Predictor {
        let train_texts = vec![
            "stocks rally on record earnings".to_string(),
            "markets close higher on profits".to_string(),
            "quarterly earnings beat expectations".to_string(),
            "team wins championship final".to_string(),
            "striker scores winning goal".to_string(),
            "coach celebrates playoff victory".to_string(),
        ];
        let train_labels = vec![
            "Business".to_string(),
            "Business".to_string(),
            "Business".to_string(),
            "Sports".to_string(),
            "Sports".to_string(),
            "Sports".to_string(),
        ];

        let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig::default());
        vectorizer.fit(&train_texts).unwrap();

        let x: Vec<SparseVector> = train_texts
            .iter()
            .map(|t| vectorizer.transform(t))
            .collect();
        let mut model = LogisticRegression::new(ClassifierConfig::default());
        model
            .fit(&x, &train_labels, vectorizer.vocabulary_size())
            .unwrap();

        Predictor::from_parts(vectorizer, model)
    }

    #[test]
    fn test_topk_length_and_order() {
        let predictor = trained_predictor();
        let prediction = predictor
            .predict_with_topk("stocks rally after earnings", 2)
            .unwrap();

        assert_eq!(prediction.topk.len(), 2);
        assert!(prediction.topk[0].1 >= prediction.topk[1].1);
        assert_eq!(prediction.label, prediction.topk[0].0);
        assert_eq!(prediction.confidence, prediction.topk[0].1);
    }

    #[test]
    fn test_topk_clamped_to_class_count() {
        let predictor = trained_predictor();
        let prediction = predictor.predict_with_topk("anything", 10).unwrap();
        assert_eq!(prediction.topk.len(), 2);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let predictor = trained_predictor();
        let first = predictor.predict_with_topk("striker scores goal", 2).unwrap();
        let second = predictor.predict_with_topk("striker scores goal", 2).unwrap();

        assert_eq!(first.label, second.label);
        assert_eq!(first.topk, second.topk);
    }

    #[test]
    fn test_predict_sensible_labels() {
        let predictor = trained_predictor();

        let (label, confidence) = predictor.predict("earnings rally markets").unwrap();
        assert_eq!(label, "Business");
        assert!(confidence > 0.5);

        let (label, _) = predictor.predict("championship winning goal").unwrap();
        assert_eq!(label, "Sports");
    }

    #[test]
    fn test_unknown_text_still_predicts() {
        // No known terms: uniform-ish probabilities, but a valid answer.
        let predictor = trained_predictor();
        let prediction = predictor.predict_with_topk("zebra quagga okapi", 3).unwrap();
        assert!(!prediction.label.is_empty());
        assert!(prediction.confidence > 0.0);
    }
}
