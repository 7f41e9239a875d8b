//! # Domain Enumerations
//!
//! `Severity`, `CompanyCategory`, and `Answer`: the three closed value sets
//! the scoring engine branches on.
//!
//! ## Wire Names
//!
//! The serde names match the report backend's payload vocabulary
//! (`Leves` / `Grave` / `Muy Grave`, `micro` / `pequena` / `no_mype`,
//! `si` / `no`), so a serialized answer set or report can be posted without
//! translation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SstError;

// ─── Severity ────────────────────────────────────────────────────────

/// Infraction tier attached to every question.
///
/// Declaration order defines the total order `Minor < Serious < VeryGrave`,
/// so "maximum severity observed" is `Iterator::max` over an
/// `Option<Severity>` where `None` means nothing was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Leve.
    #[serde(rename = "Leves", alias = "Leve")]
    Minor,
    /// Grave.
    #[serde(rename = "Grave")]
    Serious,
    /// Muy grave.
    #[serde(rename = "Muy Grave")]
    VeryGrave,
}

/// Number of severity tiers.
pub const SEVERITY_COUNT: usize = 3;

impl Severity {
    /// All tiers, ascending.
    pub fn all() -> &'static [Severity; SEVERITY_COUNT] {
        &[Self::Minor, Self::Serious, Self::VeryGrave]
    }

    /// The backend wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "Leves",
            Self::Serious => "Grave",
            Self::VeryGrave => "Muy Grave",
        }
    }

    /// Dense index (0..3) for per-severity arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "leve" | "leves" | "minor" => Ok(Self::Minor),
            "grave" | "serious" => Ok(Self::Serious),
            "muy grave" | "muy_grave" | "very_grave" | "verygrave" => Ok(Self::VeryGrave),
            _ => Err(SstError::UnknownSeverity(s.to_string())),
        }
    }
}

// ─── Company Category ────────────────────────────────────────────────

/// Company size category. Selects both the fine table and whether the
/// MYPE exemptions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyCategory {
    /// Microempresa.
    #[serde(rename = "micro")]
    Micro,
    /// Pequeña empresa.
    #[serde(rename = "pequena", alias = "small")]
    Small,
    /// Any company outside the MYPE regime (medium and large).
    #[serde(rename = "no_mype", alias = "mediana", alias = "grande", alias = "standard")]
    Standard,
}

impl CompanyCategory {
    /// All categories in table order.
    pub fn all() -> &'static [CompanyCategory; 3] {
        &[Self::Micro, Self::Small, Self::Standard]
    }

    /// Whether the category belongs to the MYPE regime (micro or small),
    /// which activates the exempt-question set.
    pub fn is_mype(&self) -> bool {
        matches!(self, Self::Micro | Self::Small)
    }

    /// The backend wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "pequena",
            Self::Standard => "no_mype",
        }
    }
}

impl std::fmt::Display for CompanyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyCategory {
    type Err = SstError;

    /// Accepts the wire names plus the medium/large aliases, which all map
    /// to `Standard`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "micro" => Ok(Self::Micro),
            "pequena" | "pequeña" | "small" => Ok(Self::Small),
            "no_mype" | "mediana" | "grande" | "standard" => Ok(Self::Standard),
            _ => Err(SstError::UnknownCategory(s.to_string())),
        }
    }
}

// ─── Answer ──────────────────────────────────────────────────────────

/// A binary questionnaire response. Only `No` can flag an infraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    /// Sí.
    #[serde(rename = "si", alias = "yes")]
    Yes,
    /// No (also used for "no sé").
    #[serde(rename = "no")]
    No,
}

impl Answer {
    /// The backend wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "si",
            Self::No => "no",
        }
    }

    /// The opposite answer.
    pub fn flipped(&self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = SstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "si" | "sí" | "yes" | "y" => Ok(Self::Yes),
            "no" | "n" | "no se" | "no sé" => Ok(Self::No),
            _ => Err(SstError::UnknownAnswer(s.to_string())),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
