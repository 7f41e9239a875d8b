//! # sst-pack -- Static Diagnosis Configuration
//!
//! The immutable data the scoring engine runs on:
//!
//! - **Fine tables** (`fines.rs`): SUNAFIL unit fines per company category,
//!   worker-count bracket, and severity. Standard-category cells are UIT
//!   multiples resolved against a configurable reference unit.
//!
//! - **Question catalog** (`catalog.rs`): severity, MYPE exemption, text,
//!   and tooltip per question.
//!
//! - **Phases** (`phases.rs`): the ordered grouping of questions with
//!   point rewards.
//!
//! - **Validation** (`validation.rs`): load-time consistency checks between
//!   phases and catalog.
//!
//! A [`Pack`] bundles all three. It is built once, validated, and shared by
//! reference; nothing in it changes after construction.
//!
//! ## Crate Policy
//!
//! - Depends only on `sst-core` internally.
//! - A pack that fails validation is never constructed.

mod builtin;
pub mod catalog;
pub mod error;
pub mod fines;
pub mod phases;
pub mod validation;

pub use catalog::{Question, QuestionCatalog, Tooltip};
pub use error::PackError;
pub use fines::{Bracket, FineRow, FineSchedule, UnitFines};
pub use phases::Phase;

use sst_core::ReferenceUnit;

/// Catalog, phases, and fine tables, validated together.
#[derive(Debug, Clone)]
pub struct Pack {
    catalog: QuestionCatalog,
    phases: Vec<Phase>,
    fines: FineSchedule,
}

impl Pack {
    /// Load the built-in pack with the given reference unit.
    pub fn load(reference_unit: ReferenceUnit) -> Result<Self, PackError> {
        let pack = Self::from_parts(
            QuestionCatalog::builtin()?,
            builtin::phases(),
            FineSchedule::builtin(reference_unit)?,
        )?;
        tracing::debug!(
            questions = pack.catalog.len(),
            phases = pack.phases.len(),
            uit = %reference_unit,
            "loaded built-in pack"
        );
        Ok(pack)
    }

    /// Assemble a pack from parts, validating phases against the catalog.
    pub fn from_parts(
        catalog: QuestionCatalog,
        phases: Vec<Phase>,
        fines: FineSchedule,
    ) -> Result<Self, PackError> {
        validation::validate_phases(&catalog, &phases)?;
        Ok(Self {
            catalog,
            phases,
            fines,
        })
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Unfiltered phases in questionnaire order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn fines(&self) -> &FineSchedule {
        &self.fines
    }

    pub fn reference_unit(&self) -> ReferenceUnit {
        self.fines.reference_unit()
    }
}
