//! Pack configuration errors.
//!
//! Every variant is a load-time failure: a pack that produces one of these
//! is never handed to the calculator or the navigator.

use sst_core::{CompanyCategory, QuestionId};
use thiserror::Error;

/// Errors detected while assembling a [`crate::Pack`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    /// The same question id is defined twice in the catalog.
    #[error("question {id} is defined more than once in the catalog")]
    DuplicateQuestion { id: QuestionId },

    /// A phase references a question the catalog does not define.
    #[error("phase {phase_id} references unknown question {id}")]
    UnknownPhaseQuestion { phase_id: u8, id: QuestionId },

    /// A question appears in more than one phase (or twice in one).
    #[error("question {id} appears in phase {first_phase} and again in phase {second_phase}")]
    OverlappingPhases {
        id: QuestionId,
        first_phase: u8,
        second_phase: u8,
    },

    /// A catalog question belongs to no phase.
    #[error("question {id} is not assigned to any phase")]
    UnassignedQuestion { id: QuestionId },

    /// A phase has no questions.
    #[error("phase {phase_id} has no questions")]
    EmptyPhase { phase_id: u8 },

    /// Every question in a phase is exempt for micro and small companies.
    #[error("phase {phase_id} has no questions for micro and small companies")]
    PhaseEmptyForMype { phase_id: u8 },

    /// No phases were configured.
    #[error("no phases configured")]
    NoPhases,

    /// Phase ids are not 1, 2, 3, ... in order.
    #[error("phase at position {position} has id {found}, expected {expected}")]
    PhaseIdOutOfSequence {
        position: usize,
        expected: u8,
        found: u8,
    },

    /// A phase's cumulative points are not the running sum of points.
    #[error("phase {phase_id} declares cumulative points {declared}, running sum is {expected}")]
    CumulativePointsMismatch {
        phase_id: u8,
        declared: u32,
        expected: u32,
    },

    /// A fine table does not have the expected number of brackets.
    #[error("{category} fine table has {found} brackets, expected {expected}")]
    IncompleteFineTable {
        category: CompanyCategory,
        expected: usize,
        found: usize,
    },

    /// Fine table brackets are not contiguous and increasing from 1.
    #[error("{category} fine table bracket {label:?}: {reason}")]
    MalformedBracket {
        category: CompanyCategory,
        label: String,
        reason: &'static str,
    },

    /// Fine amounts within a bracket must not decrease with severity.
    #[error("{category} fine table bracket {label:?}: amounts decrease with severity")]
    SeverityOrderViolated {
        category: CompanyCategory,
        label: String,
    },

    /// The reference unit value is zero.
    #[error("reference unit for {year} has zero value")]
    ZeroReferenceUnit { year: u16 },
}
