//! # sst-state -- Questionnaire Navigation & Session State Machine
//!
//! - **Navigator** (`navigator.rs`): the phase list a company category
//!   sees, question positions within it, progress fractions, and points.
//!
//! - **Session** (`session.rs`): one questionnaire run as an explicit
//!   state machine (`Answering → PhaseComplete → ... → Completed →
//!   Submitted`), recomputing exposure after each answer and logging every
//!   transition with a UTC timestamp.
//!
//! ## Design
//!
//! The session is an enum-state machine with validated transitions rather
//! than typestate types: the pointer is data, and the number of phases is
//! configuration. Invalid transitions return [`SessionError`].

pub mod navigator;
pub mod session;

// ─── Navigator re-exports ───────────────────────────────────────────

pub use navigator::{
    filtered_phases, overall_progress, progress_fraction, PhaseNavigator, QuestionPosition,
};

// ─── Session re-exports ─────────────────────────────────────────────

pub use session::{
    AnswerOutcome, AssessmentSession, BackOutcome, PhaseCompletion, SessionError, SessionState,
    SessionTransitionRecord,
};
