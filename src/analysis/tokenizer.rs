//! Regex-based word tokenizer with stop-word removal.
//!
//! # Examples
//!
//! ```
//! use newsline::analysis::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens = tokenizer.tokenize("the quick brown fox");
//! assert_eq!(tokens, vec!["quick", "brown", "fox"]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::{NewslineError, Result};

/// Common English words filtered out before feature extraction.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static ENGLISH_STOP_WORDS: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        DEFAULT_ENGLISH_STOP_WORDS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
});

/// A regex-based tokenizer that extracts word tokens and drops stop words.
///
/// The default pattern `\w+` matches sequences of word characters. Input is
/// expected to be pre-cleaned (see [`clean_text`](super::clean_text)), but
/// tokens are lowercased here as well so the tokenizer is safe on raw text.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens.
    pattern: Arc<Regex>,
    /// Words removed from the token stream.
    stop_words: Arc<HashSet<String>>,
}

impl WordTokenizer {
    /// Create a tokenizer with the default pattern and English stop words.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a tokenizer with a custom token pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| NewslineError::ingestion(format!("Invalid token pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
            stop_words: Arc::clone(&ENGLISH_STOP_WORDS),
        })
    }

    /// Replace the stop-word list.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Arc::new(words.into_iter().map(|w| w.into()).collect());
        self
    }

    /// Tokenize text into lowercase word tokens, stop words removed.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|mat| mat.as_str().to_lowercase())
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}
