//! # CLI Configuration
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults (2026 UIT, 30 s timeout, no backend URL),
//! 2. an optional YAML file passed with `--config`,
//! 3. `SST_UIT_VALUE`, `SST_UIT_YEAR`, `SST_API_URL`, `SST_TIMEOUT_SECS`,
//! 4. command-line flags.
//!
//! ```yaml
//! uit_value: 5500
//! uit_year: 2026
//! api_url: https://reports.example.pe
//! timeout_secs: 20
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use sst_client::{ClientConfig, ConfigError, DEFAULT_TIMEOUT_SECS};
use sst_core::{ReferenceUnit, Soles};

/// Global flags that override file and environment settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigFlags {
    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// UIT value in soles (e.g. 5500 or 5350.50).
    #[arg(long, global = true)]
    pub uit_value: Option<String>,

    /// Fiscal year of the UIT value.
    #[arg(long, global = true)]
    pub uit_year: Option<u16>,

    /// Base URL of the report backend.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout for the report backend, in seconds.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

/// An amount written either as a bare number or as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum AmountField {
    Whole(u64),
    Text(String),
}

impl AmountField {
    fn to_soles(&self) -> Result<Soles> {
        match self {
            Self::Whole(soles) => Soles::checked_from_soles(*soles)
                .ok_or_else(|| anyhow::anyhow!("amount too large: {soles}")),
            Self::Text(text) => Ok(text.parse::<Soles>()?),
        }
    }
}

/// The YAML configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    uit_value: Option<AmountField>,
    uit_year: Option<u16>,
    api_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub reference_unit: ReferenceUnit,
    pub api_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reference_unit: ReferenceUnit::CURRENT,
            api_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Resolve settings from the config file named in `flags`, the process
    /// environment, and `flags` themselves.
    pub fn load(flags: &ConfigFlags) -> Result<Self> {
        let file = match &flags.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, |var| std::env::var(var).ok(), flags)
    }

    pub fn resolve(
        file: FileConfig,
        lookup: impl Fn(&str) -> Option<String>,
        flags: &ConfigFlags,
    ) -> Result<Self> {
        let mut settings = Self::default();

        // File.
        if let Some(value) = &file.uit_value {
            settings.reference_unit.value = value.to_soles().context("config file uit_value")?;
        }
        if let Some(year) = file.uit_year {
            settings.reference_unit.year = year;
        }
        if file.api_url.is_some() {
            settings.api_url = file.api_url;
        }
        if let Some(secs) = file.timeout_secs {
            settings.timeout_secs = secs;
        }

        // Environment.
        let env = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        if let Some(raw) = env("SST_UIT_VALUE") {
            settings.reference_unit.value = raw.parse::<Soles>().context("SST_UIT_VALUE")?;
        }
        if let Some(raw) = env("SST_UIT_YEAR") {
            settings.reference_unit.year = raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SST_UIT_YEAR is not a year: {raw:?}"))?;
        }
        if let Some(raw) = env("SST_API_URL") {
            settings.api_url = Some(raw);
        }
        if let Some(raw) = env("SST_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => settings.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "invalid SST_TIMEOUT_SECS, ignoring"),
            }
        }

        // Flags.
        if let Some(raw) = &flags.uit_value {
            settings.reference_unit.value = raw.parse::<Soles>().context("--uit-value")?;
        }
        if let Some(year) = flags.uit_year {
            settings.reference_unit.year = year;
        }
        if let Some(url) = &flags.api_url {
            settings.api_url = Some(url.clone());
        }
        if let Some(secs) = flags.timeout_secs {
            settings.timeout_secs = secs;
        }

        if settings.timeout_secs == 0 {
            tracing::warn!(default = DEFAULT_TIMEOUT_SECS, "timeout of 0 s, using default");
            settings.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        tracing::debug!(
            uit = %settings.reference_unit,
            api_url = settings.api_url.as_deref().unwrap_or("-"),
            timeout_secs = settings.timeout_secs,
            "resolved settings"
        );
        Ok(settings)
    }

    /// Client configuration for the report backend.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let url = self.api_url.as_deref().ok_or(ConfigError::MissingApiUrl)?;
        ClientConfig::new(url, self.timeout_secs)
    }
}
