//! # Submit Subcommand
//!
//! Replays the answers to make sure the assessment is complete, then posts
//! it once to the report backend. Failures print the respondent-facing
//! message; nothing is retried.
//!
//! The profile file carries the contact details plus the company profile:
//!
//! ```json
//! {
//!   "name": "Ana Quispe",
//!   "email": "ana@constructora.pe",
//!   "phone": "+51 999 888 777",
//!   "company": "Constructora Andina SAC",
//!   "role": "Jefa de SST",
//!   "category": "pequena",
//!   "workers": 25
//! }
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use sst_client::{DiagnosisClient, DiagnosisSubmission, SubmissionError};
use sst_core::{AnswerSet, CompanyContact, CompanyProfile};
use sst_state::AssessmentSession;

use crate::assess::{replay, ReplayEnd};
use crate::{read_json, CliContext, EXIT_FAILURE, EXIT_OPERATIONAL};

/// Arguments for the `sst submit` subcommand.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Path to the profile JSON file (contact details, category, workers).
    #[arg(long)]
    pub profile: PathBuf,

    /// Path to the answers JSON file.
    #[arg(long)]
    pub answers: PathBuf,
}

/// Contents of the `--profile` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileFile {
    #[serde(flatten)]
    pub contact: CompanyContact,
    #[serde(flatten)]
    pub profile: CompanyProfile,
}

/// Execute the submit subcommand.
pub fn run_submit(args: &SubmitArgs, ctx: &CliContext) -> Result<u8> {
    let file: ProfileFile = read_json(&args.profile, "profile")?;
    let answers: AnswerSet = read_json(&args.answers, "answers")?;

    let mut session =
        AssessmentSession::new(&ctx.pack, file.profile).context("failed to start assessment")?;
    if let ReplayEnd::MissingAnswer(id) = replay(&mut session, &answers, |_| {})? {
        eprintln!("Assessment incomplete: no answer for {id}");
        return Ok(EXIT_FAILURE);
    }

    let submission =
        DiagnosisSubmission::new(file.contact, file.profile, session.answers().clone());
    if let Err(e) = submission.validate() {
        eprintln!("{}", e.user_message());
        return Ok(EXIT_FAILURE);
    }

    let client = match ctx.settings.client_config() {
        Ok(config) => DiagnosisClient::new(config)?,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{}", SubmissionError::from(e).user_message());
            return Ok(EXIT_OPERATIONAL);
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    match runtime.block_on(client.submit(&submission)) {
        Ok(receipt) => {
            session.mark_submitted()?;
            println!(
                "OK: assessment {} submitted (HTTP {}), exposure {}",
                session.id(),
                receipt.status,
                session.exposure().total
            );
            Ok(0)
        }
        Err(e) => {
            tracing::error!(retryable = e.is_retryable(), "{e}");
            eprintln!("{}", e.user_message());
            Ok(EXIT_FAILURE)
        }
    }
}
