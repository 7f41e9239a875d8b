//! # Risk Calculator
//!
//! Turns an answer set and a company profile into a [`RiskExposure`].
//!
//! ## Algorithm
//!
//! 1. Exemptions are active iff the category is micro or small.
//! 2. Every `No` answer whose id is in the catalog, and is not exempt
//!    while exemptions are active, is flagged: counted by severity, added
//!    to the breakdown, and folded into the maximum severity.
//! 3. `Yes` answers, unknown ids, and exempt ids contribute nothing.
//! 4. Unit fines come from the fine tables for (category, workers).
//! 5. `total = Σ count(severity) × unit(severity)`. No cap, no dedup.
//! 6. `delta = max(0, total − previous_total)`.
//!
//! Each call recomputes from scratch; the calculator holds no state
//! between calls and never mutates its inputs.

use sst_core::{AnswerSet, CompanyProfile, QuestionId, Severity, Soles};
use sst_pack::Pack;

use crate::exposure::{FlaggedQuestion, RiskExposure, SeverityCounts};

/// Stateless risk calculator over a loaded [`Pack`].
#[derive(Debug, Clone, Copy)]
pub struct RiskCalculator<'a> {
    pack: &'a Pack,
}

impl<'a> RiskCalculator<'a> {
    /// A calculator over the fine tables and catalog of `pack`.
    pub fn new(pack: &'a Pack) -> Self {
        Self { pack }
    }

    /// The pack this calculator reads.
    pub fn pack(&self) -> &'a Pack {
        self.pack
    }

    /// Compute the exposure for `answers` under `profile`.
    ///
    /// `previous_total` is the total of the prior run; pass
    /// [`Soles::ZERO`] for the first.
    pub fn calculate(
        &self,
        answers: &AnswerSet,
        profile: CompanyProfile,
        previous_total: Soles,
    ) -> RiskExposure {
        let mut counts = SeverityCounts::default();
        let mut breakdown = Vec::new();
        let mut max_severity: Option<Severity> = None;

        for id in answers.negatives() {
            let Some(severity) = self.penalizable(id, profile) else {
                continue;
            };
            counts.increment(severity);
            breakdown.push(FlaggedQuestion {
                id: id.clone(),
                severity,
            });
            max_severity = max_severity.max(Some(severity));
        }

        let unit_fines = self
            .pack
            .fines()
            .unit_fines(profile.category, profile.workers);

        let total: Soles = Severity::all()
            .iter()
            .map(|s| unit_fines.get(*s).times(counts.get(*s)))
            .sum();
        let delta = total.saturating_sub(previous_total);

        tracing::debug!(
            category = %profile.category,
            workers = profile.workers,
            answered = answers.len(),
            flagged = counts.total(),
            total = total.centimos(),
            delta = delta.centimos(),
            "recomputed risk exposure"
        );

        RiskExposure {
            total,
            breakdown,
            counts,
            max_severity,
            unit_fines,
            delta,
        }
    }

    /// The fine a single `No` to `id` would add under `profile`.
    ///
    /// Zero for exempt and unknown ids.
    pub fn unit_fine_for(&self, id: &QuestionId, profile: CompanyProfile) -> Soles {
        match self.penalizable(id, profile) {
            Some(severity) => self
                .pack
                .fines()
                .unit_fines(profile.category, profile.workers)
                .get(severity),
            None => Soles::ZERO,
        }
    }

    /// The severity a `No` to `id` is penalized at, if it is penalized.
    pub fn penalizable(&self, id: &QuestionId, profile: CompanyProfile) -> Option<Severity> {
        let catalog = self.pack.catalog();
        let Some(severity) = catalog.severity(id) else {
            tracing::debug!(%id, "answer for unknown question ignored");
            return None;
        };
        if profile.is_mype() && catalog.is_exempt_for_mype(id) {
            return None;
        }
        Some(severity)
    }
}
