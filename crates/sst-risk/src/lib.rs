//! # sst-risk -- Fine Exposure Scoring
//!
//! Computes the cumulative SUNAFIL penalty exposure implied by a set of
//! yes/no answers:
//!
//! - **Calculator** (`calculator.rs`): recompute-from-scratch scoring over
//!   an immutable [`sst_pack::Pack`], with MYPE exemptions and a clamped
//!   incremental delta.
//!
//! - **Exposure** (`exposure.rs`): the result value, serializable in the
//!   backend's vocabulary.
//!
//! ## Properties
//!
//! - Changing one answer from yes to no never lowers the total.
//! - The delta is never negative.
//! - The total is the literal sum of the unit fines of flagged questions.
//!
//! ## Crate Policy
//!
//! - Pure functions only; no I/O, no interior mutability.

pub mod calculator;
pub mod exposure;

pub use calculator::RiskCalculator;
pub use exposure::{FlaggedQuestion, RiskExposure, SeverityCounts, NO_SEVERITY};
