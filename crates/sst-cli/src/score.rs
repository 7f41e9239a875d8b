//! # Score Subcommand
//!
//! Computes the risk exposure for a JSON file of answers
//! (`{"q1": "si", "q2": "no", ...}`) and prints a report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sst_core::{AnswerSet, CompanyCategory, CompanyProfile, Severity, Soles};
use sst_risk::{RiskCalculator, RiskExposure};

use crate::{print_json, read_json, CliContext};

/// Arguments for the `sst score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Company category: micro, pequena, or no_mype.
    #[arg(long)]
    pub category: CompanyCategory,

    /// Number of workers.
    #[arg(long, allow_hyphen_values = true)]
    pub workers: i64,

    /// Path to the answers JSON file.
    #[arg(long)]
    pub answers: PathBuf,

    /// Total of a previous run, for the increase report (e.g. 175065 or "S/ 175,065").
    #[arg(long)]
    pub previous: Option<String>,

    /// Print the exposure as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Score `answers` for `profile`, warning about ids the catalog lacks.
pub fn score(
    ctx: &CliContext,
    profile: CompanyProfile,
    answers: &AnswerSet,
    previous: Soles,
) -> RiskExposure {
    let catalog = ctx.pack.catalog();
    for (id, _) in answers.iter() {
        if !catalog.contains(id) {
            tracing::warn!(%id, "answer for unknown question will not be scored");
        }
    }
    RiskCalculator::new(&ctx.pack).calculate(answers, profile, previous)
}

/// Execute the score subcommand.
pub fn run_score(args: &ScoreArgs, ctx: &CliContext) -> Result<u8> {
    let answers: AnswerSet = read_json(&args.answers, "answers")?;
    let previous = match &args.previous {
        Some(raw) => raw.parse::<Soles>().context("--previous")?,
        None => Soles::ZERO,
    };
    let profile = CompanyProfile::new(args.category, args.workers);
    let exposure = score(ctx, profile, &answers, previous);

    if args.json {
        print_json(&exposure)?;
    } else {
        print_report(ctx, profile, &exposure);
    }
    Ok(0)
}

pub(crate) fn print_report(ctx: &CliContext, profile: CompanyProfile, exposure: &RiskExposure) {
    let catalog = ctx.pack.catalog();
    println!(
        "Risk exposure for {} ({} workers): {}",
        profile.category, profile.workers, exposure.total
    );
    if exposure.is_increase() {
        println!("  Increase since last run: {}", exposure.delta);
    }
    println!("  Highest severity: {}", exposure.max_severity_label());
    for severity in Severity::all() {
        let count = exposure.counts.get(*severity);
        if count == 0 {
            continue;
        }
        println!(
            "  {:<10} {count} x {} = {}",
            severity.as_str(),
            exposure.unit_fines.get(*severity),
            exposure.subtotal(*severity)
        );
    }
    for flagged in &exposure.breakdown {
        println!(
            "    {:<4} [{}] {}",
            flagged.id.as_str(),
            flagged.severity,
            catalog.text(&flagged.id).unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use sst_core::{Answer, QuestionId};

    fn ctx() -> CliContext {
        CliContext::new(Settings::default()).unwrap()
    }

    fn write_answers(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("answers.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn score_one_very_grave_answer() {
        let ctx = ctx();
        let answers: AnswerSet = [(QuestionId::numbered(28), Answer::No)].into_iter().collect();
        let exposure = score(
            &ctx,
            CompanyProfile::new(CompanyCategory::Standard, 150),
            &answers,
            Soles::ZERO,
        );
        assert_eq!(exposure.total, Soles::from_soles(175_065));
    }

    #[test]
    fn unknown_ids_are_not_scored() {
        let ctx = ctx();
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new("q99").unwrap(), Answer::No);
        let exposure = score(
            &ctx,
            CompanyProfile::new(CompanyCategory::Standard, 150),
            &answers,
            Soles::ZERO,
        );
        assert_eq!(exposure.total, Soles::ZERO);
    }

    #[test]
    fn run_score_reads_file_and_previous_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_answers(&dir, r#"{"q1": "no", "q28": "no"}"#);
        let args = ScoreArgs {
            category: CompanyCategory::Standard,
            workers: 150,
            answers: path,
            previous: Some("S/ 175,065".into()),
            json: false,
        };
        assert_eq!(run_score(&args, &ctx()).unwrap(), 0);
    }

    #[test]
    fn run_score_rejects_bad_answer_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_answers(&dir, r#"{"q1": "quizas"}"#);
        let args = ScoreArgs {
            category: CompanyCategory::Micro,
            workers: 3,
            answers: path,
            previous: None,
            json: true,
        };
        let err = run_score(&args, &ctx()).unwrap_err();
        assert!(err.to_string().contains("failed to parse answers file"));
    }

    #[test]
    fn run_score_rejects_bad_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_answers(&dir, "{}");
        let args = ScoreArgs {
            category: CompanyCategory::Micro,
            workers: 3,
            answers: path,
            previous: Some("mucho".into()),
            json: false,
        };
        assert!(run_score(&args, &ctx()).is_err());
    }
}
