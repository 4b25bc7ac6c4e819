//! HTTP handlers for the dashboard and prediction API.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::server::{AppState, EXAMPLE_TEXTS};

/// Default number of ranked scores returned per prediction.
const DEFAULT_TOP_K: usize = 3;

/// A prediction request from the dashboard or an API client.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Text to classify.
    pub text: String,
    /// How many ranked scores to return; defaults to 3.
    pub k: Option<usize>,
}

/// One ranked score entry.
#[derive(Debug, Serialize)]
pub struct ScoreEntry {
    /// Class label.
    pub label: String,
    /// Predicted probability.
    pub score: f64,
}

/// Prediction response body.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Primary predicted label.
    pub label: String,
    /// Probability of the primary label.
    pub confidence: f64,
    /// Ranked `(label, score)` entries, descending.
    pub topk: Vec<ScoreEntry>,
}

/// Serve the embedded dashboard page.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("assets/index.html"))
}

/// Health/version probe.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// The example headlines for the dashboard selector.
pub async fn examples_handler() -> Json<Vec<&'static str>> {
    Json(EXAMPLE_TEXTS.to_vec())
}

/// Classify a text and return the top-k scores.
pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> impl IntoResponse {
    if request.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Please provide news text to analyze."})),
        )
            .into_response();
    }

    let k = request.k.unwrap_or(DEFAULT_TOP_K).clamp(1, 10);
    match state.predictor.predict_with_topk(&request.text, k) {
        Ok(prediction) => Json(PredictResponse {
            label: prediction.label,
            confidence: prediction.confidence,
            topk: prediction
                .topk
                .into_iter()
                .map(|(label, score)| ScoreEntry { label, score })
                .collect(),
        })
        .into_response(),
        Err(e) => {
            error!("Prediction failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
