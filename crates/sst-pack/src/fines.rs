//! # Fine Table Repository
//!
//! Tiered SUNAFIL fine tables keyed by company category and worker-count
//! bracket. Each bracket holds one unit fine per severity.
//!
//! ## Bracket Selection
//!
//! | Category | Brackets | Cell unit |
//! |----------|----------|-----------|
//! | Micro    | exact 1..9, then 10+ | soles |
//! | Small    | 1–5, 6–10, 11–20, ..., 71–99, 100+ | soles |
//! | Standard | 1–10, 11–25, 26–50, 51–100, 101–200, ..., 801–900, 901+ | UIT multiples |
//!
//! For every category the selected row is the first whose upper bound is
//! at least the worker count, falling through to the open-ended top row.
//! A worker count of zero or less yields zero fines. A missing row also
//! yields zero fines rather than an error.

use serde::{Deserialize, Serialize};
use sst_core::{CompanyCategory, ReferenceUnit, Severity, Soles, UitMultiplier, SEVERITY_COUNT};

use crate::error::PackError;

/// Expected bracket count for the micro table.
pub const MICRO_BRACKETS: usize = 10;
/// Expected bracket count for the small table.
pub const SMALL_BRACKETS: usize = 10;
/// Expected bracket count for the standard table.
pub const STANDARD_BRACKETS: usize = 13;

// ─── Brackets ────────────────────────────────────────────────────────

/// An inclusive worker-count range. `max == None` is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bracket {
    /// Label used by the fine tables, e.g. `"1 a 5"`.
    pub label: String,
    /// Lowest worker count in the bracket.
    pub min: i64,
    /// Highest worker count in the bracket, if bounded.
    pub max: Option<i64>,
}

impl Bracket {
    /// A bounded bracket.
    pub fn bounded(label: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            label: label.into(),
            min,
            max: Some(max),
        }
    }

    /// An open-ended top bracket.
    pub fn open(label: impl Into<String>, min: i64) -> Self {
        Self {
            label: label.into(),
            min,
            max: None,
        }
    }

    /// Whether `workers` is at or below this bracket's upper bound.
    fn covers_up_to(&self, workers: i64) -> bool {
        self.max.map_or(true, |max| workers <= max)
    }
}

/// One table row: a bracket and the per-severity cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FineRow<T> {
    /// The worker-count bracket.
    pub bracket: Bracket,
    /// Cells indexed by [`Severity::index`].
    pub cells: [T; SEVERITY_COUNT],
}

impl<T> FineRow<T> {
    /// Build a row from `[minor, serious, very_grave]` cells.
    pub fn new(bracket: Bracket, cells: [T; SEVERITY_COUNT]) -> Self {
        Self { bracket, cells }
    }
}

// ─── Unit Fines ──────────────────────────────────────────────────────

/// The three unit fines applicable to one (category, worker count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitFines {
    /// Fine per minor infraction.
    pub minor: Soles,
    /// Fine per serious infraction.
    pub serious: Soles,
    /// Fine per very grave infraction.
    pub very_grave: Soles,
}

impl UnitFines {
    /// All-zero fines.
    pub const ZERO: UnitFines = UnitFines {
        minor: Soles::ZERO,
        serious: Soles::ZERO,
        very_grave: Soles::ZERO,
    };

    fn from_cells(cells: [Soles; SEVERITY_COUNT]) -> Self {
        Self {
            minor: cells[Severity::Minor.index()],
            serious: cells[Severity::Serious.index()],
            very_grave: cells[Severity::VeryGrave.index()],
        }
    }

    /// The unit fine for a severity.
    pub fn get(&self, severity: Severity) -> Soles {
        match severity {
            Severity::Minor => self.minor,
            Severity::Serious => self.serious,
            Severity::VeryGrave => self.very_grave,
        }
    }
}

// ─── Schedule ────────────────────────────────────────────────────────

/// The complete, validated set of fine tables plus the reference unit used
/// to convert standard-category multipliers into soles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FineSchedule {
    micro: Vec<FineRow<Soles>>,
    small: Vec<FineRow<Soles>>,
    standard: Vec<FineRow<UitMultiplier>>,
    reference_unit: ReferenceUnit,
}

impl FineSchedule {
    /// Assemble and validate a schedule.
    ///
    /// Rejects tables with the wrong bracket count, brackets that are not
    /// contiguous from 1 with a single open-ended top row, rows whose
    /// amounts decrease with severity, and a zero reference unit.
    pub fn new(
        micro: Vec<FineRow<Soles>>,
        small: Vec<FineRow<Soles>>,
        standard: Vec<FineRow<UitMultiplier>>,
        reference_unit: ReferenceUnit,
    ) -> Result<Self, PackError> {
        validate_table(CompanyCategory::Micro, &micro, MICRO_BRACKETS)?;
        validate_table(CompanyCategory::Small, &small, SMALL_BRACKETS)?;
        validate_table(CompanyCategory::Standard, &standard, STANDARD_BRACKETS)?;
        if reference_unit.value.is_zero() {
            return Err(PackError::ZeroReferenceUnit {
                year: reference_unit.year,
            });
        }
        Ok(Self {
            micro,
            small,
            standard,
            reference_unit,
        })
    }

    /// The built-in SUNAFIL tables with the given reference unit.
    pub fn builtin(reference_unit: ReferenceUnit) -> Result<Self, PackError> {
        Self::new(
            crate::builtin::fines::micro_table(),
            crate::builtin::fines::small_table(),
            crate::builtin::fines::standard_table(),
            reference_unit,
        )
    }

    /// The reference unit in use.
    pub fn reference_unit(&self) -> ReferenceUnit {
        self.reference_unit
    }

    /// The same tables with a different reference unit.
    pub fn with_reference_unit(&self, reference_unit: ReferenceUnit) -> Result<Self, PackError> {
        Self::new(
            self.micro.clone(),
            self.small.clone(),
            self.standard.clone(),
            reference_unit,
        )
    }

    /// The bracket that applies to (category, workers).
    ///
    /// Micro with zero or fewer workers has no bracket; small and standard
    /// degrade to their smallest bracket.
    pub fn bracket(&self, category: CompanyCategory, workers: i64) -> Option<&Bracket> {
        match category {
            CompanyCategory::Micro => {
                if workers <= 0 {
                    None
                } else {
                    select(&self.micro, workers).map(|row| &row.bracket)
                }
            }
            CompanyCategory::Small => select(&self.small, workers).map(|row| &row.bracket),
            CompanyCategory::Standard => select(&self.standard, workers).map(|row| &row.bracket),
        }
    }

    /// The three unit fines for (category, workers).
    pub fn unit_fines(&self, category: CompanyCategory, workers: i64) -> UnitFines {
        if workers <= 0 {
            return UnitFines::ZERO;
        }

        let fines = match category {
            CompanyCategory::Micro => {
                select(&self.micro, workers).map(|row| UnitFines::from_cells(row.cells))
            }
            CompanyCategory::Small => {
                select(&self.small, workers).map(|row| UnitFines::from_cells(row.cells))
            }
            CompanyCategory::Standard => select(&self.standard, workers).map(|row| {
                let unit = self.reference_unit;
                UnitFines::from_cells(row.cells.map(|m| m.apply(unit)))
            }),
        };

        fines.unwrap_or_else(|| {
            tracing::debug!(%category, workers, "no fine bracket matched; using zero fines");
            UnitFines::ZERO
        })
    }

    /// The raw standard-category multipliers for a worker count.
    pub fn standard_multipliers(&self, workers: i64) -> Option<[UitMultiplier; SEVERITY_COUNT]> {
        select(&self.standard, workers).map(|row| row.cells)
    }

    /// Micro table rows.
    pub fn micro_rows(&self) -> &[FineRow<Soles>] {
        &self.micro
    }

    /// Small table rows.
    pub fn small_rows(&self) -> &[FineRow<Soles>] {
        &self.small
    }

    /// Standard table rows.
    pub fn standard_rows(&self) -> &[FineRow<UitMultiplier>] {
        &self.standard
    }
}

fn select<T>(rows: &[FineRow<T>], workers: i64) -> Option<&FineRow<T>> {
    rows.iter().find(|row| row.bracket.covers_up_to(workers))
}

fn validate_table<T: Ord>(
    category: CompanyCategory,
    rows: &[FineRow<T>],
    expected: usize,
) -> Result<(), PackError> {
    if rows.len() != expected {
        return Err(PackError::IncompleteFineTable {
            category,
            expected,
            found: rows.len(),
        });
    }

    let malformed = |row: &FineRow<T>, reason| PackError::MalformedBracket {
        category,
        label: row.bracket.label.clone(),
        reason,
    };

    let mut next_min = 1;
    for (i, row) in rows.iter().enumerate() {
        let is_last = i + 1 == rows.len();
        if row.bracket.min != next_min {
            return Err(malformed(row, "does not start where the previous bracket ended"));
        }
        match row.bracket.max {
            Some(_) if is_last => {
                return Err(malformed(row, "top bracket must be open-ended"));
            }
            Some(max) if max < row.bracket.min => {
                return Err(malformed(row, "upper bound is below lower bound"));
            }
            Some(max) => next_min = max + 1,
            None if !is_last => {
                return Err(malformed(row, "only the top bracket may be open-ended"));
            }
            None => {}
        }
        if !row.cells.windows(2).all(|pair| pair[0] <= pair[1]) {
            return Err(PackError::SeverityOrderViolated {
                category,
                label: row.bracket.label.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> FineSchedule {
        FineSchedule::builtin(ReferenceUnit::UIT_2026).unwrap()
    }

    fn label(s: &FineSchedule, category: CompanyCategory, workers: i64) -> Option<String> {
        s.bracket(category, workers).map(|b| b.label.clone())
    }

    #[test]
    fn test_builtin_tables_validate() {
        let s = schedule();
        assert_eq!(s.micro_rows().len(), MICRO_BRACKETS);
        assert_eq!(s.small_rows().len(), SMALL_BRACKETS);
        assert_eq!(s.standard_rows().len(), STANDARD_BRACKETS);
    }

    #[test]
    fn test_micro_boundaries() {
        let s = schedule();
        assert_eq!(label(&s, CompanyCategory::Micro, 9).as_deref(), Some("9"));
        assert_eq!(label(&s, CompanyCategory::Micro, 10).as_deref(), Some("10 y más"));
        assert_eq!(label(&s, CompanyCategory::Micro, 250).as_deref(), Some("10 y más"));
        assert_eq!(label(&s, CompanyCategory::Micro, 1).as_deref(), Some("1"));
        assert_eq!(label(&s, CompanyCategory::Micro, 0), None);
    }

    #[test]
    fn test_small_boundaries() {
        let s = schedule();
        assert_eq!(label(&s, CompanyCategory::Small, 5).as_deref(), Some("1 a 5"));
        assert_eq!(label(&s, CompanyCategory::Small, 6).as_deref(), Some("6 a 10"));
        assert_eq!(label(&s, CompanyCategory::Small, 99).as_deref(), Some("71 a 99"));
        assert_eq!(label(&s, CompanyCategory::Small, 100).as_deref(), Some("100 y más"));
        assert_eq!(label(&s, CompanyCategory::Small, -3).as_deref(), Some("1 a 5"));
    }

    #[test]
    fn test_standard_boundaries() {
        let s = schedule();
        assert_eq!(label(&s, CompanyCategory::Standard, 100).as_deref(), Some("51-100"));
        assert_eq!(label(&s, CompanyCategory::Standard, 101).as_deref(), Some("101-200"));
        assert_eq!(label(&s, CompanyCategory::Standard, 900).as_deref(), Some("801-900"));
        assert_eq!(label(&s, CompanyCategory::Standard, 901).as_deref(), Some("901-a-mas"));
        assert_eq!(label(&s, CompanyCategory::Standard, 0).as_deref(), Some("1-10"));
    }

    #[test]
    fn test_micro_unit_fines() {
        let s = schedule();
        let fines = s.unit_fines(CompanyCategory::Micro, 1);
        assert_eq!(fines.minor, Soles::from_centimos(24_075));
        assert_eq!(fines.serious, Soles::from_centimos(58_850));
        assert_eq!(fines.very_grave, Soles::from_centimos(123_050));

        let top = s.unit_fines(CompanyCategory::Micro, 10);
        assert_eq!(top.very_grave, Soles::from_centimos(363_800));
    }

    #[test]
    fn test_small_unit_fines() {
        let s = schedule();
        let fines = s.unit_fines(CompanyCategory::Small, 6);
        assert_eq!(fines.minor, Soles::from_centimos(74_900));
        assert_eq!(fines.serious, Soles::from_centimos(315_650));
        assert_eq!(fines.very_grave, Soles::from_centimos(674_200));
    }

    #[test]
    fn test_standard_unit_fines_use_reference_unit() {
        let s = schedule();
        let fines = s.unit_fines(CompanyCategory::Standard, 150);
        assert_eq!(fines.minor, Soles::from_soles(8_690));
        assert_eq!(fines.serious, Soles::from_soles(82_170));
        assert_eq!(fines.very_grave, Soles::from_soles(175_065));
    }

    #[test]
    fn test_standard_unit_fines_follow_reference_unit_override() {
        let s = schedule()
            .with_reference_unit(ReferenceUnit::new(2024, Soles::from_soles(5_150)))
            .unwrap();
        // 31.83 × 5,150 = 163,924.50
        assert_eq!(
            s.unit_fines(CompanyCategory::Standard, 150).very_grave,
            Soles::from_centimos(16_392_450)
        );
    }

    #[test]
    fn test_zero_and_negative_workers_yield_zero_fines() {
        let s = schedule();
        for category in CompanyCategory::all() {
            assert_eq!(s.unit_fines(*category, 0), UnitFines::ZERO);
            assert_eq!(s.unit_fines(*category, -7), UnitFines::ZERO);
        }
    }

    #[test]
    fn test_unit_fines_get_matches_fields() {
        let fines = schedule().unit_fines(CompanyCategory::Small, 42);
        assert_eq!(fines.get(Severity::Minor), fines.minor);
        assert_eq!(fines.get(Severity::Serious), fines.serious);
        assert_eq!(fines.get(Severity::VeryGrave), fines.very_grave);
    }

    #[test]
    fn test_rejects_incomplete_table() {
        let mut micro = crate::builtin::fines::micro_table();
        micro.pop();
        let err = FineSchedule::new(
            micro,
            crate::builtin::fines::small_table(),
            crate::builtin::fines::standard_table(),
            ReferenceUnit::UIT_2026,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PackError::IncompleteFineTable {
                category: CompanyCategory::Micro,
                expected: 10,
                found: 9
            }
        ));
    }

    #[test]
    fn test_rejects_gap_between_brackets() {
        let mut small = crate::builtin::fines::small_table();
        small[1].bracket.min = 7;
        let err = FineSchedule::new(
            crate::builtin::fines::micro_table(),
            small,
            crate::builtin::fines::standard_table(),
            ReferenceUnit::UIT_2026,
        )
        .unwrap_err();
        assert!(matches!(err, PackError::MalformedBracket { .. }));
    }

    #[test]
    fn test_rejects_bounded_top_bracket() {
        let mut standard = crate::builtin::fines::standard_table();
        if let Some(last) = standard.last_mut() {
            last.bracket.max = Some(1_000);
        }
        let err = FineSchedule::new(
            crate::builtin::fines::micro_table(),
            crate::builtin::fines::small_table(),
            standard,
            ReferenceUnit::UIT_2026,
        )
        .unwrap_err();
        assert!(matches!(err, PackError::MalformedBracket { .. }));
    }

    #[test]
    fn test_rejects_decreasing_severity_amounts() {
        let mut micro = crate::builtin::fines::micro_table();
        micro[0].cells.swap(0, 2);
        let err = FineSchedule::new(
            micro,
            crate::builtin::fines::small_table(),
            crate::builtin::fines::standard_table(),
            ReferenceUnit::UIT_2026,
        )
        .unwrap_err();
        assert!(matches!(err, PackError::SeverityOrderViolated { .. }));
    }

    #[test]
    fn test_rejects_zero_reference_unit() {
        let err = FineSchedule::builtin(ReferenceUnit::new(2026, Soles::ZERO)).unwrap_err();
        assert_eq!(err, PackError::ZeroReferenceUnit { year: 2026 });
    }
}
