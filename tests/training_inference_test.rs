//! End-to-end tests: ingest, train, and predict against fresh artifacts.

use std::fs;

use newsline::config::ArtifactPaths;
use newsline::inference::Predictor;
use newsline::ingestion::DataLoader;
use newsline::training::{TrainingConfig, TrainingPipeline};
use tempfile::tempdir;

/// A small three-class corpus with distinctive vocabulary per class.
fn raw_jsonl() -> String {
    let rows = [
        ("Stocks rally on strong quarterly earnings", "BUSINESS"),
        ("Markets close higher after fed rate decision", "BUSINESS"),
        ("Investors cheer record company profits", "BUSINESS"),
        ("Central bank tightens monetary policy", "MONEY"),
        ("Shares slump as earnings disappoint investors", "BUSINESS"),
        ("Banking sector posts strong revenue growth", "BUSINESS"),
        ("Team wins championship in thrilling final", "SPORTS"),
        ("Star striker scores stunning winning goal", "SPORTS"),
        ("Coach praises squad after playoff victory", "SPORTS"),
        ("Captain leads team to league title", "SPORTS"),
        ("Underdogs stun champions in cup upset", "SPORTS"),
        ("Veteran goalkeeper saves late penalty kick", "SPORTS"),
        ("Parliament passes sweeping education reform bill", "POLITICS"),
        ("Prime minister announces cabinet reshuffle", "POLITICS"),
        ("Senators debate new immigration legislation", "POLITICS"),
        ("Governor signs controversial voting law", "POLITICS"),
        ("Opposition party demands election recount", "POLITICS"),
        ("President vetoes defense spending bill", "POLITICS"),
    ];

    rows.iter()
        .map(|(headline, category)| {
            format!("{{\"headline\": \"{headline}\", \"category\": \"{category}\"}}\n")
        })
        .collect()
}

#[test]
fn test_full_pipeline_and_prediction() {
    let dir = tempdir().unwrap();
    let raw = dir.path().join("raw.jsonl");
    let dataset = dir.path().join("dataset.csv");
    let artifacts = ArtifactPaths::in_dir(dir.path().join("artifacts"));

    fs::write(&raw, raw_jsonl()).unwrap();
    DataLoader::new(&raw, &dataset).run_ingestion().unwrap();

    let report = TrainingPipeline::new(TrainingConfig {
        dataset_path: dataset,
        artifacts: artifacts.clone(),
        ..TrainingConfig::default()
    })
    .run()
    .unwrap();

    assert_eq!(report.classes, vec!["Business", "Politics", "Sports"]);
    assert_eq!(report.n_train + report.n_test, 18);
    assert!(report.n_test >= 3, "each class contributes a test sample");

    // Report file carries the metrics table and the accuracy line.
    let report_file = fs::read_to_string(&artifacts.report).unwrap();
    assert!(report_file.contains("precision"));
    assert!(report_file.contains("Accuracy:"));

    // Artifacts load back into a working predictor.
    let predictor = Predictor::load(&artifacts).unwrap();

    let prediction = predictor
        .predict_with_topk("striker scores goal in championship final", 3)
        .unwrap();
    assert_eq!(prediction.label, "Sports");
    assert_eq!(prediction.topk.len(), 3);
    for pair in prediction.topk.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "topk must be sorted descending");
    }

    let (label, confidence) = predictor
        .predict("markets rally as earnings beat expectations")
        .unwrap();
    assert_eq!(label, "Business");
    assert!(confidence > 1.0 / 3.0);
}

#[test]
fn test_predictions_are_deterministic_across_loads() {
    let dir = tempdir().unwrap();
    let raw = dir.path().join("raw.jsonl");
    let dataset = dir.path().join("dataset.csv");
    let artifacts = ArtifactPaths::in_dir(dir.path().join("artifacts"));

    fs::write(&raw, raw_jsonl()).unwrap();
    DataLoader::new(&raw, &dataset).run_ingestion().unwrap();
    TrainingPipeline::new(TrainingConfig {
        dataset_path: dataset,
        artifacts: artifacts.clone(),
        ..TrainingConfig::default()
    })
    .run()
    .unwrap();

    let first = Predictor::load(&artifacts)
        .unwrap()
        .predict_with_topk("parliament votes on reform bill", 3)
        .unwrap();
    let second = Predictor::load(&artifacts)
        .unwrap()
        .predict_with_topk("parliament votes on reform bill", 3)
        .unwrap();

    assert_eq!(first.label, second.label);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.topk, second.topk);
}

#[test]
fn test_predictor_load_missing_artifacts() {
    let dir = tempdir().unwrap();
    let artifacts = ArtifactPaths::in_dir(dir.path().join("nowhere"));
    assert!(Predictor::load(&artifacts).is_err());
}
