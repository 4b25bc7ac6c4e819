//! Error types for the newsline library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`NewslineError`] enum. Ingestion failures are wrapped into the
//! [`NewslineError::Ingestion`] variant with the original cause rendered
//! into the message, so callers see one error kind for the whole ingestion
//! path; training and inference propagate the more specific variants.
//!
//! # Examples
//!
//! ```
//! use newsline::error::{NewslineError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NewslineError::ingestion("no rows survived validation"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for newsline operations.
#[derive(Error, Debug)]
pub enum NewslineError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Data ingestion errors (loading, flattening, validation)
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Dataset schema errors (missing text/label columns, etc.)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Model training or prediction errors
    #[error("Model error: {0}")]
    Model(String),

    /// Artifact persistence errors (vectorizer/classifier save and load)
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NewslineError.
pub type Result<T> = std::result::Result<T, NewslineError>;

impl NewslineError {
    /// Create a new ingestion error.
    pub fn ingestion<S: Into<String>>(msg: S) -> Self {
        NewslineError::Ingestion(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        NewslineError::Schema(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        NewslineError::Model(msg.into())
    }

    /// Create a new artifact error.
    pub fn artifact<S: Into<String>>(msg: S) -> Self {
        NewslineError::Artifact(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NewslineError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NewslineError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        NewslineError::Other(format!("Not found: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NewslineError::ingestion("empty dataset");
        assert_eq!(error.to_string(), "Ingestion error: empty dataset");

        let error = NewslineError::schema("missing label column");
        assert_eq!(error.to_string(), "Schema error: missing label column");

        let error = NewslineError::model("classifier is not trained");
        assert_eq!(error.to_string(), "Model error: classifier is not trained");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = NewslineError::from(io_error);

        match error {
            NewslineError::Io(_) => {}
            other => panic!("expected Io variant, got {other:?}"),
        }
    }
}
