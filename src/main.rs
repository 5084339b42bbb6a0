//! Diamond CLI - Command-line interface for replaying scripted baseball.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use diamond::{BaseOccupancy, Outcome};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Diamond - A deterministic baseball play-by-play replay engine
#[derive(Parser, Debug)]
#[command(name = "diamond")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a single plate appearance
    Transition {
        /// Plate-appearance outcome (e.g. single, ground_out, HR, BB)
        #[arg(short, long)]
        outcome: Outcome,

        /// Outs before the play (0-2)
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=2))]
        outs: u8,

        /// Occupied bases, e.g. 1-3, 12-, loaded (default: empty)
        #[arg(short, long, default_value = "---")]
        bases: BaseOccupancy,

        /// Batter id
        #[arg(long, default_value = "batter")]
        batter: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::TransitionFormat,
    },

    /// Print the full transition table
    Table {
        /// Only show rows for this outcome
        #[arg(short, long)]
        outcome: Option<Outcome>,

        /// Output format: text, csv, or json
        #[arg(short, long, default_value = "text")]
        format: cli::TableFormat,
    },

    /// Replay one scripted game
    Play {
        /// Game script (.json)
        #[arg(required = true)]
        script: PathBuf,

        /// Regulation innings (default: 9)
        #[arg(long)]
        innings: Option<u16>,

        /// Declare a tie after this many innings
        #[arg(long)]
        max_innings: Option<u16>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::PlayFormat,
    },

    /// Replay a season of scripted games in parallel
    Season {
        /// Season script (.json)
        #[arg(required = true)]
        script: PathBuf,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,

        /// Regulation innings (overrides the season script)
        #[arg(long)]
        innings: Option<u16>,

        /// Declare a tie after this many innings (overrides the season script)
        #[arg(long)]
        max_innings: Option<u16>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SeasonFormat,
    },
}

/// Log to stderr. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Transition {
            outcome,
            outs,
            bases,
            batter,
            format,
        } => cli::transition::execute(outcome, outs, bases, &batter, format),

        Commands::Table { outcome, format } => cli::table::execute(outcome, format),

        Commands::Play {
            script,
            innings,
            max_innings,
            format,
        } => cli::play::execute(&script, innings, max_innings, format),

        Commands::Season {
            script,
            threads,
            progress,
            innings,
            max_innings,
            format,
        } => cli::season::execute(&script, threads, progress, innings, max_innings, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_outs_limited_to_two() {
        for outs in ["0", "1", "2"] {
            let args =
                Args::try_parse_from(["diamond", "transition", "-o", "walk", "--outs", outs])
                    .unwrap();
            assert!(matches!(args.command, Commands::Transition { .. }));
        }
        let err = Args::try_parse_from(["diamond", "transition", "-o", "walk", "--outs", "3"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_transition_rejects_batter_already_on_base() {
        let err = cli::transition::execute(
            Outcome::Walk,
            0,
            "1--".parse().unwrap(),
            "r1",
            cli::TransitionFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            cli::CliError::State(diamond::StateError::BatterOnBase { .. })
        ));
    }
}
