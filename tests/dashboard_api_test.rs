//! Tests for the dashboard API handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use newsline::features::{SparseVector, TfIdfVectorizer, VectorizerConfig};
use newsline::inference::Predictor;
use newsline::models::{ClassifierConfig, LogisticRegression};
use newsline::server::handlers::{PredictRequest, examples_handler, predict_handler};
use newsline::server::{AppState, EXAMPLE_TEXTS};

fn trained_state() -> Arc<AppState> {
    let texts = vec![
        "stocks rally on record earnings".to_string(),
        "markets close higher on profits".to_string(),
        "quarterly earnings beat expectations".to_string(),
        "team wins championship final".to_string(),
        "striker scores winning goal".to_string(),
        "coach celebrates playoff victory".to_string(),
    ];
    let labels = vec![
        "Business".to_string(),
        "Business".to_string(),
        "Business".to_string(),
        "Sports".to_string(),
        "Sports".to_string(),
        "Sports".to_string(),
    ];

    let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig::default());
    vectorizer.fit(&texts).unwrap();
    let x: Vec<SparseVector> = texts.iter().map(|t| vectorizer.transform(t)).collect();

    let mut model = LogisticRegression::new(ClassifierConfig::default());
    model.fit(&x, &labels, vectorizer.vocabulary_size()).unwrap();

    Arc::new(AppState {
        predictor: Predictor::from_parts(vectorizer, model),
    })
}

#[tokio::test]
async fn test_predict_handler_ok() {
    let state = trained_state();
    let response = predict_handler(
        State(state),
        Json(PredictRequest {
            text: "striker scores in the final".to_string(),
            k: Some(2),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), axum::http::StatusCode::OK);
}

#[tokio::test]
async fn test_predict_handler_rejects_blank_text() {
    let state = trained_state();
    let response = predict_handler(
        State(state),
        Json(PredictRequest {
            text: "   ".to_string(),
            k: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_examples_handler_returns_all_examples() {
    let Json(examples) = examples_handler().await;
    assert_eq!(examples.len(), EXAMPLE_TEXTS.len());
    assert!(examples.contains(&"Apple launched a new AI-powered smartphone."));
}
