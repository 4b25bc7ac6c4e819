//! Command line argument parsing for the newsline CLI using clap.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ARTIFACTS_DIR, PROCESSED_DATA_PATH, RAW_DATA_PATH};

/// newsline - news-article classification from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "newsline")]
#[command(about = "Ingest, train, and serve a news-article text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NewslineArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NewslineArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Ingest a raw JSON/JSONL dataset into a validated CSV
    Ingest(IngestArgs),

    /// Train the classifier on a processed dataset
    Train(TrainArgs),

    /// Classify text interactively from stdin
    Predict(PredictArgs),

    /// Serve the web dashboard
    Serve(ServeArgs),
}

/// Arguments for ingestion
#[derive(Parser, Debug, Clone)]
pub struct IngestArgs {
    /// Raw dataset path (JSON or JSONL)
    #[arg(short, long, value_name = "RAW_FILE", default_value = RAW_DATA_PATH)]
    pub input: PathBuf,

    /// Output path for the processed CSV
    #[arg(short, long, value_name = "CSV_FILE", default_value = PROCESSED_DATA_PATH)]
    pub output: PathBuf,
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Processed CSV dataset path
    #[arg(short, long, value_name = "CSV_FILE", default_value = PROCESSED_DATA_PATH)]
    pub dataset: PathBuf,

    /// Directory for trained artifacts and the report
    #[arg(short, long, value_name = "DIR", default_value = ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
}

/// Arguments for interactive prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Directory holding the trained artifacts
    #[arg(short, long, value_name = "DIR", default_value = ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Number of ranked scores to show per prediction
    #[arg(short = 'k', long, default_value = "3")]
    pub top_k: usize,
}

/// Arguments for the dashboard server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Directory holding the trained artifacts
    #[arg(short, long, value_name = "DIR", default_value = ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingest_defaults() {
        let args = NewslineArgs::parse_from(["newsline", "ingest"]);
        match args.command {
            Command::Ingest(ingest) => {
                assert_eq!(ingest.input, PathBuf::from(RAW_DATA_PATH));
                assert_eq!(ingest.output, PathBuf::from(PROCESSED_DATA_PATH));
            }
            other => panic!("expected ingest, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = NewslineArgs::parse_from(["newsline", "ingest"]);
        assert_eq!(args.verbosity(), 1);

        let args = NewslineArgs::parse_from(["newsline", "-vv", "ingest"]);
        assert_eq!(args.verbosity(), 2);

        let args = NewslineArgs::parse_from(["newsline", "--quiet", "ingest"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_parse_serve_addr() {
        let args =
            NewslineArgs::parse_from(["newsline", "serve", "--addr", "0.0.0.0:9000"]);
        match args.command {
            Command::Serve(serve) => {
                assert_eq!(serve.addr.port(), 9000);
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }
}
