//! CLI entrypoint for `layer-merge`.
//!
//! Reads each file as a layer, merges them in order with the resolved
//! options, and writes the result to stdout as JSON. Logs go to stderr and
//! are filtered through `RUST_LOG`.

mod cli;
mod error;
mod options;

use std::io::{self, Write};

use clap::Parser;
use layer_merge::{LayerComposition, merge_layers};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;
use crate::error::CliError;

fn main() -> Result<(), CliError> {
    run()
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();
    init_logging();
    let stdout = io::stdout();
    execute(&args, &mut stdout.lock())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Merge the layers named by `args` and write the JSON result to `out`.
fn execute<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let options = options::resolve_options(args)?;
    let merged = LayerComposition::load_files(&args.files)
        .into_merge_result(|layers| Ok(merge_layers(layers, &options)))?;
    info!(layers = args.files.len(), "merged layers");
    let json = Value::from(merged);
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &json)?;
    } else {
        serde_json::to_writer(&mut *out, &json)?;
    }
    writeln!(out)?;
    Ok(())
}
