//! # Pack Validation Rules
//!
//! Cross-checks the phase list against the question catalog before a
//! [`crate::Pack`] is handed out.
//!
//! ## Rules
//!
//! 1. **Non-empty**: at least one phase, and every phase has a question.
//! 2. **Sequence**: phase ids are `1, 2, 3, ...` in list order.
//! 3. **Resolution**: every phase question exists in the catalog.
//! 4. **Partition**: no question appears twice across phases, and every
//!    catalog question belongs to some phase.
//! 5. **Points**: each phase's cumulative points equal the running sum of
//!    `points` through that phase.
//! 6. **MYPE coverage**: no phase consists only of questions exempt for
//!    micro and small companies, so the filtered list never has an empty
//!    phase.
//!
//! The first violation found is returned.

use std::collections::HashMap;

use sst_core::QuestionId;

use crate::catalog::QuestionCatalog;
use crate::error::PackError;
use crate::phases::Phase;

// ---------------------------------------------------------------------------
// Phase / Catalog Consistency
// ---------------------------------------------------------------------------

/// Validate `phases` against `catalog`.
pub fn validate_phases(catalog: &QuestionCatalog, phases: &[Phase]) -> Result<(), PackError> {
    if phases.is_empty() {
        return Err(PackError::NoPhases);
    }

    let mut owner: HashMap<&QuestionId, u8> = HashMap::with_capacity(catalog.len());
    let mut running_points: u32 = 0;

    for (position, phase) in phases.iter().enumerate() {
        let expected = u8::try_from(position + 1).unwrap_or(u8::MAX);
        if phase.id != expected {
            return Err(PackError::PhaseIdOutOfSequence {
                position,
                expected,
                found: phase.id,
            });
        }
        if phase.is_empty() {
            return Err(PackError::EmptyPhase { phase_id: phase.id });
        }
        if phase
            .question_ids
            .iter()
            .all(|id| catalog.is_exempt_for_mype(id))
        {
            return Err(PackError::PhaseEmptyForMype { phase_id: phase.id });
        }

        for id in &phase.question_ids {
            if !catalog.contains(id) {
                return Err(PackError::UnknownPhaseQuestion {
                    phase_id: phase.id,
                    id: id.clone(),
                });
            }
            if let Some(first_phase) = owner.insert(id, phase.id) {
                return Err(PackError::OverlappingPhases {
                    id: id.clone(),
                    first_phase,
                    second_phase: phase.id,
                });
            }
        }

        running_points = running_points.saturating_add(phase.points);
        if phase.cumulative_points != running_points {
            return Err(PackError::CumulativePointsMismatch {
                phase_id: phase.id,
                declared: phase.cumulative_points,
                expected: running_points,
            });
        }
    }

    if let Some(orphan) = catalog.iter().find(|q| !owner.contains_key(&q.id)) {
        return Err(PackError::UnassignedQuestion {
            id: orphan.id.clone(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::builtin().unwrap()
    }

    fn q(n: u32) -> QuestionId {
        QuestionId::numbered(n)
    }

    #[test]
    fn test_builtin_phases_are_consistent() {
        assert_eq!(validate_phases(&catalog(), &crate::builtin::phases()), Ok(()));
    }

    #[test]
    fn test_no_phases() {
        assert_eq!(validate_phases(&catalog(), &[]), Err(PackError::NoPhases));
    }

    #[test]
    fn test_unknown_question() {
        let mut phases = crate::builtin::phases();
        phases[0].question_ids.push(q(99));
        assert_eq!(
            validate_phases(&catalog(), &phases),
            Err(PackError::UnknownPhaseQuestion {
                phase_id: 1,
                id: q(99)
            })
        );
    }

    #[test]
    fn test_overlap_across_phases() {
        let mut phases = crate::builtin::phases();
        phases[1].question_ids.push(q(3));
        assert_eq!(
            validate_phases(&catalog(), &phases),
            Err(PackError::OverlappingPhases {
                id: q(3),
                first_phase: 1,
                second_phase: 2
            })
        );
    }

    #[test]
    fn test_unassigned_question() {
        let mut phases = crate::builtin::phases();
        phases[2].question_ids.retain(|id| *id != q(40));
        assert_eq!(
            validate_phases(&catalog(), &phases),
            Err(PackError::UnassignedQuestion { id: q(40) })
        );
    }

    #[test]
    fn test_empty_phase() {
        let mut phases = crate::builtin::phases();
        phases[1].question_ids.clear();
        assert_eq!(
            validate_phases(&catalog(), &phases),
            Err(PackError::EmptyPhase { phase_id: 2 })
        );
    }

    #[test]
    fn test_phase_of_only_exempt_questions() {
        let c = catalog();
        let mut phases = crate::builtin::phases();
        phases[2].question_ids = c.exempt_ids().cloned().collect();
        assert_eq!(
            validate_phases(&c, &phases),
            Err(PackError::PhaseEmptyForMype { phase_id: 3 })
        );
    }

    #[test]
    fn test_cumulative_points_mismatch() {
        let mut phases = crate::builtin::phases();
        phases[2].cumulative_points = 500;
        assert_eq!(
            validate_phases(&catalog(), &phases),
            Err(PackError::CumulativePointsMismatch {
                phase_id: 3,
                declared: 500,
                expected: 600
            })
        );
    }

    #[test]
    fn test_phase_ids_out_of_sequence() {
        let mut phases = crate::builtin::phases();
        phases.swap(0, 1);
        assert_eq!(
            validate_phases(&catalog(), &phases),
            Err(PackError::PhaseIdOutOfSequence {
                position: 0,
                expected: 1,
                found: 2
            })
        );
    }
}
