//! Data ingestion: raw JSON/JSONL in, validated CSV dataset out.
//!
//! The entry point is [`DataLoader::run_ingestion`], which loads the raw
//! file, flattens nested records, discovers the text/label columns, drops
//! invalid rows, maps raw categories onto the target taxonomy, and persists
//! the result as CSV. Every failure along the way is wrapped into
//! [`NewslineError::Ingestion`](crate::error::NewslineError::Ingestion) or
//! [`NewslineError::Schema`](crate::error::NewslineError::Schema).

pub mod flatten;
pub mod loader;

use serde::{Deserialize, Serialize};

pub use loader::{DataLoader, load_dataset};

/// A validated dataset row: non-empty text plus a taxonomy category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article text (headline or body), non-empty after trimming.
    pub text: String,
    /// Category label from the target taxonomy.
    pub category: String,
}

impl Article {
    /// Create a new article row.
    pub fn new<T: Into<String>, C: Into<String>>(text: T, category: C) -> Self {
        Article {
            text: text.into(),
            category: category.into(),
        }
    }
}
