//! # Risk Exposure Result
//!
//! The value produced by one calculator run. Everything in it is derived
//! from the inputs of that run; nothing is carried over except the
//! previous total used for the delta.
//!
//! ## Wire Shape
//!
//! ```json
//! {
//!   "total": 25723500,
//!   "breakdown": [{"id": "q11", "severity": "Muy Grave"}, ...],
//!   "counts": {"minor": 0, "serious": 1, "very_grave": 1},
//!   "max_severity": "Muy Grave",
//!   "unit_fines": {"minor": ..., "serious": ..., "very_grave": ...},
//!   "delta": 8217000
//! }
//! ```
//!
//! Amounts are céntimos. `max_severity` is `"Ninguna"` when nothing was
//! flagged.

use serde::{Deserialize, Serialize};
use sst_core::{QuestionId, Severity, Soles};
use sst_pack::UnitFines;

/// Wire label for "no severity observed".
pub const NO_SEVERITY: &str = "Ninguna";

/// One penalized question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedQuestion {
    pub id: QuestionId,
    pub severity: Severity,
}

/// Number of flagged questions per severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub minor: u32,
    pub serious: u32,
    pub very_grave: u32,
}

impl SeverityCounts {
    /// Count for one severity.
    pub fn get(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Minor => self.minor,
            Severity::Serious => self.serious,
            Severity::VeryGrave => self.very_grave,
        }
    }

    /// Increment the count for one severity.
    pub fn increment(&mut self, severity: Severity) {
        let slot = match severity {
            Severity::Minor => &mut self.minor,
            Severity::Serious => &mut self.serious,
            Severity::VeryGrave => &mut self.very_grave,
        };
        *slot = slot.saturating_add(1);
    }

    /// Total flagged questions.
    pub fn total(&self) -> u32 {
        self.minor
            .saturating_add(self.serious)
            .saturating_add(self.very_grave)
    }
}

/// Result of one risk calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskExposure {
    /// Σ count(severity) × unit fine(severity).
    pub total: Soles,
    /// Flagged questions in question order.
    pub breakdown: Vec<FlaggedQuestion>,
    pub counts: SeverityCounts,
    /// Highest severity among flagged questions.
    #[serde(with = "max_severity_wire")]
    pub max_severity: Option<Severity>,
    /// The unit fines the total was computed with.
    pub unit_fines: UnitFines,
    /// `max(0, total − previous_total)`.
    pub delta: Soles,
}

impl RiskExposure {
    /// Whether this run raised the exposure over the previous total.
    pub fn is_increase(&self) -> bool {
        !self.delta.is_zero()
    }

    /// Wire label of the maximum severity, `"Ninguna"` if none.
    pub fn max_severity_label(&self) -> &'static str {
        self.max_severity.map_or(NO_SEVERITY, |s| s.as_str())
    }

    /// Subtotal contributed by one severity.
    pub fn subtotal(&self, severity: Severity) -> Soles {
        self.unit_fines.get(severity).times(self.counts.get(severity))
    }
}

mod max_severity_wire {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use sst_core::Severity;

    use super::NO_SEVERITY;

    pub fn serialize<S: Serializer>(value: &Option<Severity>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(severity) => severity.serialize(s),
            None => s.serialize_str(NO_SEVERITY),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Severity>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw == NO_SEVERITY {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(de::Error::custom)
    }
}
