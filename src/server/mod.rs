//! Web dashboard and prediction API.
//!
//! A small axum application: the root serves an embedded HTML dashboard
//! (text box, example selector, top-3 score bars), and `/api/predict`
//! answers JSON prediction requests. The [`Predictor`] is loaded once at
//! startup and shared read-only with every handler through axum state; the
//! process holds no other state.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::error::{NewslineError, Result};
use crate::inference::Predictor;

/// Sample headlines offered by the dashboard's example selector.
pub const EXAMPLE_TEXTS: &[&str] = &[
    "The government passed a new education reform bill in parliament today.",
    "The prime minister announced major policy changes ahead of the elections.",
    "World leaders met at the climate summit to discuss global carbon emission targets.",
    "The United Nations held an emergency meeting over the international crisis.",
    "The stock market rallied after the company reported record quarterly profits.",
    "The central bank announced new interest rate policies to control inflation.",
    "Google unveiled a new AI model for real-time language translation.",
    "Apple launched a new AI-powered smartphone.",
    "The football team won the championship in a thrilling final.",
    "The cricket captain scored a century to lead his team to victory.",
    "Scientists discovered a new exoplanet in a distant galaxy.",
    "Researchers developed a breakthrough vaccine using novel gene-editing techniques.",
    "The company reported record profits this quarter.",
    "The new superhero movie broke box office records in its opening weekend.",
    "The popular web series was renewed for another season after fan demand.",
    "Experts shared tips on healthy eating and daily exercise routines.",
    "Travel bloggers recommended the top destinations to visit this summer.",
    "The government announced funding for new AI research programs.",
    "A famous athlete invested in a new tech startup.",
    "The movie explores climate change and its global impact.",
];

/// Shared application state: the process-lifetime predictor.
#[derive(Debug)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub predictor: Predictor,
}

/// Build the dashboard router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/health", get(handlers::health_handler))
        .route("/api/examples", get(handlers::examples_handler))
        .route("/api/predict", post(handlers::predict_handler))
        .with_state(state)
}

/// Bind and serve the dashboard until the process exits.
pub async fn run(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| NewslineError::other(format!("Failed to bind {addr}: {e}")))?;
    info!("Dashboard listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| NewslineError::other(format!("Server error: {e}")))?;

    Ok(())
}
