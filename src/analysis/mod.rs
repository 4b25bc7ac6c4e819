//! Text analysis: cleaning and tokenization.
//!
//! Raw article text goes through two stages before feature extraction:
//!
//! ```text
//! Raw Text → clean_text → WordTokenizer → tokens
//! ```
//!
//! [`clean_text`](cleaner::clean_text) normalizes casing, punctuation, and
//! whitespace; [`WordTokenizer`](tokenizer::WordTokenizer) extracts word
//! tokens and removes English stop words.

pub mod cleaner;
pub mod tokenizer;

pub use cleaner::clean_text;
pub use tokenizer::WordTokenizer;
