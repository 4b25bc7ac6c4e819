//! Command Line Interface for the newsline classifier.

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
