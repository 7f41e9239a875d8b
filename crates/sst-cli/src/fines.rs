//! # Fines Subcommand
//!
//! Resolves the worker-count bracket for a company and prints the fine per
//! infraction at each severity.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sst_core::{CompanyCategory, Severity};
use sst_pack::UnitFines;

use crate::{print_json, CliContext};

/// Arguments for the `sst fines` subcommand.
#[derive(Args, Debug)]
pub struct FinesArgs {
    /// Company category: micro, pequena, or no_mype.
    #[arg(long)]
    pub category: CompanyCategory,

    /// Number of workers.
    #[arg(long, allow_hyphen_values = true)]
    pub workers: i64,

    /// Print the lookup as JSON.
    #[arg(long)]
    pub json: bool,
}

/// The lookup result as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct FineLookup {
    pub category: CompanyCategory,
    pub workers: i64,
    /// Bracket label; absent when no bracket applies.
    pub bracket: Option<String>,
    /// UIT multipliers, standard category only.
    pub multipliers: Option<[String; 3]>,
    pub unit_fines: UnitFines,
}

pub fn lookup(ctx: &CliContext, category: CompanyCategory, workers: i64) -> FineLookup {
    let fines = ctx.pack.fines();
    let multipliers = match category {
        CompanyCategory::Standard => fines
            .standard_multipliers(workers)
            .map(|m| m.map(|x| x.to_string())),
        _ => None,
    };
    FineLookup {
        category,
        workers,
        bracket: fines.bracket(category, workers).map(|b| b.label.clone()),
        multipliers,
        unit_fines: fines.unit_fines(category, workers),
    }
}

/// Execute the fines subcommand.
pub fn run_fines(args: &FinesArgs, ctx: &CliContext) -> Result<u8> {
    let found = lookup(ctx, args.category, args.workers);
    if args.json {
        print_json(&found)?;
        return Ok(0);
    }

    println!("Category: {} ({} workers)", found.category, found.workers);
    match &found.bracket {
        Some(label) => println!("  Bracket: {label}"),
        None => println!("  Bracket: none (no fines apply)"),
    }
    if found.category == CompanyCategory::Standard {
        println!("  UIT: {}", ctx.pack.reference_unit());
    }
    for severity in Severity::all() {
        let multiplier = found
            .multipliers
            .as_ref()
            .map(|m| format!("  ({} UIT)", m[severity.index()]))
            .unwrap_or_default();
        println!(
            "  {:<10} {}{multiplier}",
            severity.as_str(),
            found.unit_fines.get(*severity)
        );
    }
    Ok(0)
}
