//! Inference: loading trained artifacts and serving predictions.

pub mod predictor;

pub use predictor::{Prediction, Predictor};
