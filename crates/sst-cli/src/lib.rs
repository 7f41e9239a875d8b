//! # sst-cli -- Command-line front end for the SST diagnosis stack
//!
//! ## Subcommands
//!
//! - `sst fines` -- bracket and per-infraction fines for a company.
//! - `sst phases` -- the questionnaire as a given category sees it.
//! - `sst score` -- risk exposure for a file of answers.
//! - `sst assess` -- replay answers through a full assessment session.
//! - `sst submit` -- send a completed assessment to the report backend.
//!
//! ```bash
//! sst fines --category no_mype --workers 150
//! sst score --category pequena --workers 12 --answers answers.json --json
//! SST_API_URL=https://reports.example.pe sst submit --profile empresa.json --answers answers.json
//! ```
//!
//! ## Exit codes
//!
//! `0` success, `1` the command ran but the outcome is a failure (incomplete
//! assessment, rejected submission), `2` operational error (unreadable
//! files, bad configuration).

pub mod assess;
pub mod config;
pub mod fines;
pub mod phases;
pub mod score;
pub mod submit;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sst_pack::Pack;

use crate::config::Settings;

/// Exit code for a command whose outcome is a failure.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for configuration, I/O and other operational errors.
pub const EXIT_OPERATIONAL: u8 = 2;

/// Resolved settings plus the pack built from them.
#[derive(Debug)]
pub struct CliContext {
    pub settings: Settings,
    pub pack: Pack,
}

impl CliContext {
    pub fn new(settings: Settings) -> Result<Self> {
        let pack = Pack::load(settings.reference_unit).context("failed to load question pack")?;
        Ok(Self { settings, pack })
    }
}

/// Read and parse a JSON file, naming `what` in any error.
pub fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {what} file {}", path.display()))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
