//! Newsline CLI binary.

use std::process;

use clap::Parser;
use newsline::cli::{args::NewslineArgs, commands::execute_command};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = NewslineArgs::parse();

    // Map verbosity flags to a log level; RUST_LOG still wins when set.
    let default_level = match args.verbosity() {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
