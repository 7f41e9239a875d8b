//! # sst CLI entry point
//!
//! Parses command-line arguments, installs logging, resolves settings and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sst_cli::assess::{run_assess, AssessArgs};
use sst_cli::config::{ConfigFlags, Settings};
use sst_cli::fines::{run_fines, FinesArgs};
use sst_cli::phases::{run_phases, PhasesArgs};
use sst_cli::score::{run_score, ScoreArgs};
use sst_cli::submit::{run_submit, SubmitArgs};
use sst_cli::{CliContext, EXIT_OPERATIONAL};

/// SST compliance self-assessment toolkit.
///
/// Looks up fines, lists the questionnaire, scores answers against the
/// occupational safety and health fine tables, and submits completed
/// assessments to the report backend.
#[derive(Parser, Debug)]
#[command(name = "sst", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(flatten)]
    settings: ConfigFlags,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the bracket and per-infraction fines for a company.
    Fines(FinesArgs),

    /// List the questionnaire phases a company category sees.
    Phases(PhasesArgs),

    /// Compute the risk exposure for a file of answers.
    Score(ScoreArgs),

    /// Replay answers through a full assessment session.
    Assess(AssessArgs),

    /// Submit a completed assessment to the report backend.
    Submit(SubmitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!("sst CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let ctx = match Settings::load(&cli.settings).and_then(CliContext::new) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(EXIT_OPERATIONAL);
        }
    };

    let result = match &cli.command {
        Commands::Fines(args) => run_fines(args, &ctx),
        Commands::Phases(args) => run_phases(args, &ctx),
        Commands::Score(args) => run_score(args, &ctx),
        Commands::Assess(args) => run_assess(args, &ctx),
        Commands::Submit(args) => run_submit(args, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_OPERATIONAL)
        }
    }
}
