//! # mpd entry point
//!
//! Parses command-line arguments, initializes tracing from the verbosity
//! flags, and dispatches to the card emitter.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mpd_cli::emit::run_emit;
use mpd_cli::DEFAULT_OUTPUT;

/// Build the MonopathPatientDAGs Croissant dataset card.
///
/// Prints the card JSON to standard output and writes it to
/// `croissant.json` (or the path given with --out).
#[derive(Parser, Debug)]
#[command(name = "mpd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output path for the rendered card.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Validate the card and print the issue report without writing.
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!(out = %cli.out.display(), check = cli.check, "mpd starting");

    match run_emit(&cli.out, cli.check) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_defaults() {
        let cli = Cli::try_parse_from(["mpd"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.out, PathBuf::from("croissant.json"));
        assert!(!cli.check);
    }

    #[test]
    fn cli_parse_out_override() {
        let cli = Cli::try_parse_from(["mpd", "--out", "/tmp/card.json"]).unwrap();
        assert_eq!(cli.out, PathBuf::from("/tmp/card.json"));
    }

    #[test]
    fn cli_parse_check_flag() {
        let cli = Cli::try_parse_from(["mpd", "--check"]).unwrap();
        assert!(cli.check);
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["mpd"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli1 = Cli::try_parse_from(["mpd", "-v"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli2 = Cli::try_parse_from(["mpd", "-vv"]).unwrap();
        assert_eq!(cli2.verbose, 2);

        let cli3 = Cli::try_parse_from(["mpd", "-vvv"]).unwrap();
        assert_eq!(cli3.verbose, 3);
    }

    #[test]
    fn cli_parse_rejects_unknown_argument() {
        let result = Cli::try_parse_from(["mpd", "--frobnicate"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_debug_impl() {
        let cli = Cli::try_parse_from(["mpd"]).unwrap();
        let debug = format!("{cli:?}");
        assert!(debug.contains("Cli"));
    }
}
