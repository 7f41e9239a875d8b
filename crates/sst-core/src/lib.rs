//! # sst-core -- Foundational Types for the SST Diagnosis Stack
//!
//! Defines the type-system primitives every other crate in the workspace
//! builds on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerations.** `Severity` (three tiers, totally ordered) and
//!    `CompanyCategory` (exactly three variants) are enums, so bracket
//!    selection and exemption logic is checked exhaustively at compile time.
//!
//! 2. **Integer money.** `Soles` counts céntimos and `UitMultiplier` counts
//!    hundredths of a reference unit. No floating point touches an amount.
//!
//! 3. **Newtype identifiers.** `QuestionId` and `AssessmentId` are distinct
//!    types; question ids order numerically (`q2 < q10`).
//!
//! 4. **UTC-only timestamps** for session transition records.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sst-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod answers;
pub mod domain;
pub mod error;
pub mod identity;
pub mod money;
pub mod profile;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use answers::AnswerSet;
pub use domain::{Answer, CompanyCategory, Severity, SEVERITY_COUNT};
pub use error::SstError;
pub use identity::{AssessmentId, QuestionId};
pub use money::{ReferenceUnit, Soles, UitMultiplier};
pub use profile::{CompanyContact, CompanyProfile};
pub use temporal::Timestamp;
