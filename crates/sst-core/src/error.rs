//! # Error Types
//!
//! Parse and construction errors for the foundational types. Every error
//! carries the offending input so callers can report it verbatim.

use thiserror::Error;

/// Top-level error type for `sst-core` primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SstError {
    /// Company category string not recognized.
    #[error("unknown company category: {0:?}")]
    UnknownCategory(String),

    /// Severity string not recognized.
    #[error("unknown severity: {0:?}")]
    UnknownSeverity(String),

    /// Answer string not recognized.
    #[error("unknown answer: {0:?} (expected \"si\" or \"no\")")]
    UnknownAnswer(String),

    /// Question identifier is malformed.
    #[error("invalid question id {input:?}: {reason}")]
    InvalidQuestionId {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Monetary amount could not be parsed or overflowed.
    #[error("invalid amount {input:?}: {reason}")]
    InvalidAmount {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}
