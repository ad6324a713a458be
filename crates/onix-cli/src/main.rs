//! # onix-parser CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use onix_cli::codes::{run_codes, CodesArgs};
use onix_cli::parse::{run_parse, ParseArgs};
use onix_cli::EXIT_FAILURE;

/// ONIX 3.0 ledger pipeline.
///
/// Projects ONIX for Books product records into flat JSON documents and
/// routes them into full, update and delete ledgers.
#[derive(Parser, Debug)]
#[command(name = "onix-parser", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML pipeline configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process a directory of ONIX messages into JSONL ledgers.
    Parse(ParseArgs),

    /// Print codelist entries.
    Codes(CodesArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "onix-parser starting");

    let result = match &cli.command {
        Commands::Parse(args) => run_parse(args, cli.config.as_deref()),
        Commands::Codes(args) => run_codes(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_positional_arguments() {
        let cli = Cli::try_parse_from(["onix-parser", "parse", "in", "out", "Feed"]).unwrap();
        let Commands::Parse(args) = cli.command else {
            panic!("expected parse");
        };
        assert_eq!(args.input, PathBuf::from("in"));
        assert_eq!(args.output, PathBuf::from("out"));
        assert_eq!(args.source_name, "Feed");
        assert!(args.pattern.is_none());
        assert!(!args.fail_on_invalid_file);
        assert!(!args.summary);
    }

    #[test]
    fn cli_parse_flags() {
        let cli = Cli::try_parse_from([
            "onix-parser",
            "parse",
            "in",
            "out",
            "Feed",
            "--pattern",
            "*.onix",
            "--fail-on-invalid-file",
            "--summary",
        ])
        .unwrap();
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.pattern.as_deref(), Some("*.onix"));
            assert!(args.fail_on_invalid_file);
            assert!(args.summary);
        }
    }

    #[test]
    fn cli_parse_requires_source_name() {
        assert!(Cli::try_parse_from(["onix-parser", "parse", "in", "out"]).is_err());
    }

    #[test]
    fn cli_global_options() {
        let cli = Cli::try_parse_from([
            "onix-parser",
            "parse",
            "in",
            "out",
            "Feed",
            "-vv",
            "--config",
            "p.yaml",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("p.yaml")));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn cli_default_log_format_is_text() {
        let cli = Cli::try_parse_from(["onix-parser", "codes", "1"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Text);
        if let Commands::Codes(args) = cli.command {
            assert_eq!(args.list, 1);
            assert!(args.code.is_none());
        }
    }

    #[test]
    fn cli_rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["onix-parser", "--log-format", "xml", "codes", "1"]).is_err());
    }
}
