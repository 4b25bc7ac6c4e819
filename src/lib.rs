//! # Newsline
//!
//! News-article text classification for Rust: ingest labeled JSON data,
//! train a TF-IDF + logistic-regression classifier, and serve predictions
//! through a CLI or a web dashboard.
//!
//! ## Pipeline
//!
//! ```text
//! raw JSON/JSONL → ingestion → dataset.csv → training → artifacts → inference
//! ```
//!
//! ## Features
//!
//! - JSON/JSONL ingestion with nested-record flattening and column discovery
//! - Fixed category taxonomy with raw-label mapping tables
//! - In-crate TF-IDF vectorization (uni+bigrams, sublinear TF, L2 norm)
//! - Multinomial logistic regression with class-balanced weighting
//! - Accuracy / precision / recall / F1 evaluation reports
//! - Interactive CLI and an axum web dashboard

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod inference;
pub mod ingestion;
pub mod models;
pub mod server;
pub mod taxonomy;
pub mod training;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
