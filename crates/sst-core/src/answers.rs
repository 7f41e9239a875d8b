//! # Answer Set
//!
//! Mapping from question id to answer. Recording an answer for an id that
//! already has one overwrites it. Iteration is in question order, which
//! keeps reports deterministic; the order in which questions were
//! answered is the caller's concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Answer;
use crate::identity::QuestionId;

/// The answers recorded so far in one assessment.
///
/// Serializes as a flat JSON object: `{"q1": "si", "q2": "no"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerSet {
    /// An empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) an answer. Returns the previous answer, if any.
    pub fn record(&mut self, id: QuestionId, answer: Answer) -> Option<Answer> {
        self.answers.insert(id, answer)
    }

    /// Remove an answer. Returns it, if present.
    pub fn remove(&mut self, id: &QuestionId) -> Option<Answer> {
        self.answers.remove(id)
    }

    /// The answer for `id`, if recorded.
    pub fn get(&self, id: &QuestionId) -> Option<Answer> {
        self.answers.get(id).copied()
    }

    /// Whether `id` has been answered.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    /// Number of recorded answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether no answers are recorded.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// All answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, Answer)> {
        self.answers.iter().map(|(id, a)| (id, *a))
    }

    /// Ids answered `No`, in question order.
    pub fn negatives(&self) -> impl Iterator<Item = &QuestionId> {
        self.answers
            .iter()
            .filter(|(_, a)| **a == Answer::No)
            .map(|(id, _)| id)
    }
}

impl FromIterator<(QuestionId, Answer)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Answer)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

impl Extend<(QuestionId, Answer)> for AnswerSet {
    fn extend<T: IntoIterator<Item = (QuestionId, Answer)>>(&mut self, iter: T) {
        self.answers.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: u32) -> QuestionId {
        QuestionId::numbered(n)
    }

    #[test]
    fn test_record_overwrites() {
        let mut set = AnswerSet::new();
        assert_eq!(set.record(q(1), Answer::No), None);
        assert_eq!(set.record(q(1), Answer::Yes), Some(Answer::No));
        assert_eq!(set.get(&q(1)), Some(Answer::Yes));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_negatives_in_question_order() {
        let set: AnswerSet = [(q(10), Answer::No), (q(2), Answer::No), (q(3), Answer::Yes)]
            .into_iter()
            .collect();
        let negatives: Vec<&str> = set.negatives().map(|id| id.as_str()).collect();
        assert_eq!(negatives, vec!["q2", "q10"]);
    }

    #[test]
    fn test_json_shape() {
        let set: AnswerSet = [(q(1), Answer::Yes), (q(2), Answer::No)].into_iter().collect();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!({"q1": "si", "q2": "no"}));

        let parsed: AnswerSet = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_json_rejects_bad_answer() {
        let result: Result<AnswerSet, _> =
            serde_json::from_value(serde_json::json!({"q1": "maybe"}));
        assert!(result.is_err());
    }
}
