//! Command implementations for the newsline CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::cli::args::*;
use crate::config::ArtifactPaths;
use crate::error::{NewslineError, Result};
use crate::inference::Predictor;
use crate::ingestion::DataLoader;
use crate::server::{self, AppState};
use crate::training::{TrainingConfig, TrainingPipeline};

/// Execute a CLI command.
pub fn execute_command(args: NewslineArgs) -> Result<()> {
    match &args.command {
        Command::Ingest(ingest_args) => run_ingest(ingest_args.clone(), &args),
        Command::Train(train_args) => run_train(train_args.clone(), &args),
        Command::Predict(predict_args) => run_predict(predict_args.clone(), &args),
        Command::Serve(serve_args) => run_serve(serve_args.clone(), &args),
    }
}

/// Ingest the raw dataset into a validated CSV.
fn run_ingest(args: IngestArgs, cli_args: &NewslineArgs) -> Result<()> {
    let loader = DataLoader::new(&args.input, &args.output);
    let articles = loader.run_ingestion()?;

    if cli_args.verbosity() > 0 {
        println!(
            "Ingested {} rows into {}",
            articles.len(),
            args.output.display()
        );
    }
    Ok(())
}

/// Train on the processed dataset and persist artifacts.
fn run_train(args: TrainArgs, cli_args: &NewslineArgs) -> Result<()> {
    let config = TrainingConfig {
        dataset_path: args.dataset,
        artifacts: ArtifactPaths::in_dir(&args.artifacts),
        ..TrainingConfig::default()
    };
    let report = TrainingPipeline::new(config).run()?;

    if cli_args.verbosity() > 0 {
        println!("Accuracy: {}", report.accuracy);
        println!("\nClassification Report:\n{}", report.report_text);
        println!("Model & vectorizer saved in {}/", args.artifacts.display());
    }
    Ok(())
}

/// Interactive prediction loop; the literal input "exit" terminates.
fn run_predict(args: PredictArgs, cli_args: &NewslineArgs) -> Result<()> {
    let predictor = Predictor::load(&ArtifactPaths::in_dir(&args.artifacts))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter news text (or 'exit'): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let text = line?;

        if text.trim().to_lowercase() == "exit" {
            break;
        }
        if text.trim().is_empty() {
            continue;
        }

        let prediction = predictor.predict_with_topk(&text, args.top_k)?;
        println!(
            "Predicted Category: {} | Confidence: {:.2}",
            prediction.label, prediction.confidence
        );
        if cli_args.verbosity() > 1 {
            for (label, score) in &prediction.topk {
                println!("  {label}: {score:.4}");
            }
        }
    }

    Ok(())
}

/// Load the artifacts once and serve the dashboard.
fn run_serve(args: ServeArgs, cli_args: &NewslineArgs) -> Result<()> {
    let predictor = Predictor::load(&ArtifactPaths::in_dir(&args.artifacts))?;
    let state = Arc::new(AppState { predictor });

    if cli_args.verbosity() > 0 {
        println!("Dashboard available at http://{}", args.addr);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| NewslineError::other(format!("Failed to start runtime: {e}")))?;
    runtime.block_on(server::run(args.addr, state))
}
