//! # Phases Subcommand
//!
//! Lists the questionnaire as a given company category sees it, with
//! exempt questions already removed.

use anyhow::Result;
use clap::Args;
use sst_core::CompanyCategory;
use sst_state::PhaseNavigator;

use crate::CliContext;

/// Arguments for the `sst phases` subcommand.
#[derive(Args, Debug)]
pub struct PhasesArgs {
    /// Company category: micro, pequena, or no_mype.
    #[arg(long)]
    pub category: CompanyCategory,

    /// Also list every question with its severity.
    #[arg(long)]
    pub questions: bool,
}

/// Execute the phases subcommand.
pub fn run_phases(args: &PhasesArgs, ctx: &CliContext) -> Result<u8> {
    let navigator = PhaseNavigator::new(&ctx.pack, args.category);
    let catalog = ctx.pack.catalog();

    println!(
        "Questionnaire for {} ({} questions, {} points):",
        args.category,
        navigator.total_questions(),
        navigator.total_points()
    );
    for phase in navigator.phases() {
        println!(
            "  Phase {}: {} -- {} questions, {} pts (cumulative {})",
            phase.id,
            phase.name,
            phase.len(),
            phase.points,
            phase.cumulative_points
        );
        if !args.questions {
            continue;
        }
        for id in &phase.question_ids {
            let severity = catalog.severity(id).map(|s| s.as_str()).unwrap_or("?");
            let text = catalog.text(id).unwrap_or_default();
            println!("    {:<4} [{severity}] {text}", id.as_str());
        }
    }
    Ok(0)
}
