//! # Identifier Newtypes
//!
//! `QuestionId` keys the catalog, answer sets and phases; `AssessmentId`
//! names one run of the questionnaire. Distinct types keep a question key
//! from being passed where an assessment key is expected.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SstError;

/// Identifier of a catalog question, e.g. `q17`.
///
/// Any non-empty, whitespace-free string is accepted so that answers to
/// ids the catalog does not know can still be carried (and ignored by the
/// calculator) rather than rejected. Ordering is numeric for the
/// conventional `q<N>` form, so `q2 < q10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Validate and wrap a question identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, SstError> {
        let id = id.into();
        if id.is_empty() {
            return Err(SstError::InvalidQuestionId {
                input: id,
                reason: "must not be empty",
            });
        }
        if id.chars().any(char::is_whitespace) {
            return Err(SstError::InvalidQuestionId {
                input: id,
                reason: "must not contain whitespace",
            });
        }
        Ok(Self(id))
    }

    /// Build the conventional `q<N>` identifier.
    pub fn numbered(n: u32) -> Self {
        Self(format!("q{n}"))
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric part of a `q<N>` identifier.
    pub fn number(&self) -> Option<u32> {
        self.0.strip_prefix('q')?.parse().ok()
    }
}

impl Ord for QuestionId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for QuestionId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<String> for QuestionId {
    type Error = SstError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for QuestionId {
    type Error = SstError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl std::str::FromStr for QuestionId {
    type Err = SstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for one assessment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    /// Generate a new random assessment identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "assessment:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ordering() {
        let mut ids: Vec<QuestionId> = ["q10", "q2", "q1", "q41"]
            .iter()
            .map(|s| QuestionId::new(*s).unwrap())
            .collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(sorted, vec!["q1", "q2", "q10", "q41"]);
    }

    #[test]
    fn test_non_numeric_ids_sort_after_numbered() {
        let a = QuestionId::new("q3").unwrap();
        let b = QuestionId::new("extra").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(QuestionId::new("").is_err());
        assert!(QuestionId::new("q 1").is_err());
    }

    #[test]
    fn test_serde_validates() {
        let ok: QuestionId = serde_json::from_str("\"q17\"").unwrap();
        assert_eq!(ok.number(), Some(17));
        assert!(serde_json::from_str::<QuestionId>("\"\"").is_err());
    }

    #[test]
    fn test_numbered_matches_new() {
        assert_eq!(QuestionId::numbered(5), QuestionId::new("q5").unwrap());
    }

    #[test]
    fn test_assessment_id_display() {
        let id = AssessmentId::new();
        assert!(id.to_string().starts_with("assessment:"));
    }
}
