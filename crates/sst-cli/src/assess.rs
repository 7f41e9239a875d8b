//! # Assess Subcommand
//!
//! Replays a file of answers through an [`AssessmentSession`] in phase
//! order, the way a respondent would go through the questionnaire:
//! every answer recomputes the exposure, and each phase ends with its
//! completion screen.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sst_core::{AnswerSet, CompanyCategory, CompanyProfile, QuestionId};
use sst_state::{AnswerOutcome, AssessmentSession, SessionState};

use crate::{print_json, read_json, score, CliContext, EXIT_FAILURE};

/// Arguments for the `sst assess` subcommand.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Company category: micro, pequena, or no_mype.
    #[arg(long)]
    pub category: CompanyCategory,

    /// Number of workers.
    #[arg(long, allow_hyphen_values = true)]
    pub workers: i64,

    /// Path to the answers JSON file.
    #[arg(long)]
    pub answers: PathBuf,

    /// Print the session transition log as JSON at the end.
    #[arg(long)]
    pub transitions: bool,
}

/// How a replay ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEnd {
    /// Every phase was answered.
    Completed,
    /// The file has no answer for this question.
    MissingAnswer(QuestionId),
}

/// Drive `session` with `answers` until it completes or an answer is
/// missing. `observe` sees every recorded answer.
pub fn replay(
    session: &mut AssessmentSession<'_>,
    answers: &AnswerSet,
    mut observe: impl FnMut(&AnswerOutcome),
) -> Result<ReplayEnd> {
    loop {
        match session.state() {
            SessionState::Answering { .. } => {
                let Some((id, _)) = session.current() else {
                    anyhow::bail!("session has no active question in state {}", session.state());
                };
                let Some(answer) = answers.get(id) else {
                    return Ok(ReplayEnd::MissingAnswer(id.clone()));
                };
                let outcome = session.answer(answer)?;
                observe(&outcome);
            }
            SessionState::PhaseComplete { .. } => {
                session.continue_after_phase()?;
            }
            SessionState::Completed | SessionState::Submitted => return Ok(ReplayEnd::Completed),
        }
    }
}

/// Execute the assess subcommand.
pub fn run_assess(args: &AssessArgs, ctx: &CliContext) -> Result<u8> {
    let answers: AnswerSet = read_json(&args.answers, "answers")?;
    let profile = CompanyProfile::new(args.category, args.workers);
    let mut session =
        AssessmentSession::new(&ctx.pack, profile).context("failed to start assessment")?;

    println!(
        "Assessment {} started {} for {} ({} workers), {} questions",
        session.id(),
        session.created_at(),
        profile.category,
        profile.workers,
        session.navigator().total_questions()
    );

    let end = replay(&mut session, &answers, |outcome| {
        if outcome.exposure.is_increase() {
            println!(
                "  {} = {} -> exposure {} (+{})",
                outcome.question, outcome.answer, outcome.exposure.total, outcome.exposure.delta
            );
        }
        if let Some(done) = &outcome.phase_completed {
            println!(
                "  Phase {} complete: {} ({} pts)",
                done.phase_id, done.name, done.cumulative_points
            );
            println!("    {}", done.message);
            println!("    -> {}", done.call_to_action);
        }
    })?;

    let code = match &end {
        ReplayEnd::Completed => {
            score::print_report(ctx, profile, session.exposure());
            0
        }
        ReplayEnd::MissingAnswer(id) => {
            println!(
                "Stopped at {id}: no answer in {} ({} pts, {:.0}% done)",
                args.answers.display(),
                session.points(),
                session.progress() * 100.0
            );
            EXIT_FAILURE
        }
    };

    if args.transitions {
        print_json(&session.transitions())?;
    }
    Ok(code)
}
