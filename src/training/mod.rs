//! Model training: dataset preparation, splitting, fitting, evaluation.
//!
//! [`TrainingPipeline`](pipeline::TrainingPipeline) drives the whole
//! sequence: processed CSV in, fitted artifacts and an evaluation report
//! out.

pub mod pipeline;
pub mod split;

pub use pipeline::{TrainingConfig, TrainingPipeline, TrainingReport};
pub use split::stratified_split;
