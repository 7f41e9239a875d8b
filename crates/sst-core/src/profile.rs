//! # Company Profile
//!
//! The two inputs the scoring engine needs (`CompanyProfile`) and the
//! contact details the report backend needs (`CompanyContact`).

use serde::{Deserialize, Serialize};

use crate::domain::CompanyCategory;

/// Category and headcount of the assessed company.
///
/// `workers` is signed so that zero or negative headcounts coming from a
/// form are representable; the fine tables resolve them to zero fines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company size category.
    pub category: CompanyCategory,
    /// Number of workers.
    pub workers: i64,
}

impl CompanyProfile {
    /// Build a profile.
    pub fn new(category: CompanyCategory, workers: i64) -> Self {
        Self { category, workers }
    }

    /// Whether MYPE exemptions apply.
    pub fn is_mype(&self) -> bool {
        self.category.is_mype()
    }
}

/// Contact details submitted alongside the answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyContact {
    /// Respondent's name.
    pub name: String,
    /// Corporate email the report is sent to.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Company name.
    pub company: String,
    /// Respondent's role in the company.
    pub role: String,
}
