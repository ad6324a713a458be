//! # Parse Subcommand
//!
//! Runs every ONIX file in an input directory through the ledger pipeline
//! and writes `full`, `update` and `delete` ledgers to an output directory.
//!
//! ```bash
//! onix-parser parse ./onix ./out "Academic Observatory"
//! onix-parser -v --config pipeline.yaml parse ./onix ./out feed --summary
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use onix_ledger::{run_directory, write_ledgers, LedgerError, PipelineConfig};

use crate::{EXIT_OK, EXIT_REJECTED};

/// Arguments for the parse subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Directory containing ONIX message files.
    pub input: PathBuf,

    /// Directory the ledgers are written to. Created if missing.
    pub output: PathBuf,

    /// Data-source name, used as the prefix of every derived COKI_ID.
    pub source_name: String,

    /// File-name glob for input discovery (overrides the config file).
    #[arg(long)]
    pub pattern: Option<String>,

    /// Abort on the first unreadable file instead of skipping it.
    #[arg(long)]
    pub fail_on_invalid_file: bool,

    /// Print the batch summary as JSON on stdout.
    #[arg(long)]
    pub summary: bool,
}

/// Load the config file if one was given, then apply flag overrides.
pub fn resolve_config(args: &ParseArgs, config_path: Option<&Path>) -> Result<PipelineConfig> {
    let mut config = match config_path {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(pattern) = &args.pattern {
        config.reader.pattern = pattern.clone();
    }
    if args.fail_on_invalid_file {
        config.reader.fail_on_invalid_file = true;
    }
    config.validate()?;
    Ok(config)
}

/// Execute the parse subcommand.
///
/// Returns [`EXIT_REJECTED`] when the batch is rejected; nothing is written
/// in that case. Operational failures are returned as errors.
pub fn run_parse(args: &ParseArgs, config_path: Option<&Path>) -> Result<u8> {
    anyhow::ensure!(
        !args.source_name.trim().is_empty(),
        "source name must not be empty"
    );
    let config = resolve_config(args, config_path)?;

    let outcome = match run_directory(&args.input, &config, &args.source_name) {
        Ok(outcome) => outcome,
        Err(LedgerError::Batch(err)) => {
            tracing::error!(error = %err, "batch rejected, no ledgers written");
            eprintln!("error: {err}");
            return Ok(EXIT_REJECTED);
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to process {}", args.input.display()))
        }
    };

    let paths = write_ledgers(&outcome.ledgers, &args.output, &config.ledger_files)
        .with_context(|| format!("failed to write ledgers to {}", args.output.display()))?;

    for (path, ledger) in paths.iter().zip(outcome.ledgers.iter()) {
        tracing::info!(ledger = %ledger.kind(), documents = ledger.len(), path = %path.display(), "ledger written");
    }

    if args.summary {
        println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    }
    Ok(EXIT_OK)
}
