//! # Question Catalog
//!
//! Read-only lookup of question metadata: severity, MYPE-exemption flag,
//! display text, and tooltip. Unknown ids are lookup misses, never errors;
//! callers decide whether a miss matters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sst_core::{QuestionId, Severity};

use crate::error::PackError;

/// Contextual help shown next to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    /// What the obligation is.
    pub definition: String,
    /// The legal exposure of not meeting it.
    pub legal_risk: String,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub severity: Severity,
    /// Not penalized, and not asked, for micro and small companies.
    pub exempt_for_mype: bool,
    pub text: String,
    pub tooltip: Option<Tooltip>,
}

/// The question catalog, in catalog order, indexed by id.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// Build a catalog. Rejects duplicate ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, PackError> {
        let mut index = HashMap::with_capacity(questions.len());
        for (i, q) in questions.iter().enumerate() {
            if index.insert(q.id.clone(), i).is_some() {
                return Err(PackError::DuplicateQuestion { id: q.id.clone() });
            }
        }
        Ok(Self { questions, index })
    }

    /// The built-in catalog.
    pub fn builtin() -> Result<Self, PackError> {
        Self::new(crate::builtin::questions())
    }

    /// The full entry for `id`.
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Whether `id` is in the catalog.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.index.contains_key(id)
    }

    pub fn severity(&self, id: &QuestionId) -> Option<Severity> {
        self.get(id).map(|q| q.severity)
    }

    /// Whether `id` is exempt for MYPE companies. Unknown ids are not.
    pub fn is_exempt_for_mype(&self, id: &QuestionId) -> bool {
        self.get(id).map_or(false, |q| q.exempt_for_mype)
    }

    pub fn text(&self, id: &QuestionId) -> Option<&str> {
        self.get(id).map(|q| q.text.as_str())
    }

    pub fn tooltip(&self, id: &QuestionId) -> Option<&Tooltip> {
        self.get(id).and_then(|q| q.tooltip.as_ref())
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Ids of MYPE-exempt questions, in catalog order.
    pub fn exempt_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.questions
            .iter()
            .filter(|q| q.exempt_for_mype)
            .map(|q| &q.id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
