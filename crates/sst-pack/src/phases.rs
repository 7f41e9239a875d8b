//! Phase definitions.
//!
//! A phase is an ordered group of questions with a point reward. The
//! unfiltered list is what the pack validates; per-category filtering
//! lives with the navigator.

use serde::{Deserialize, Serialize};
use sst_core::QuestionId;

/// One questionnaire phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// 1-based phase number.
    pub id: u8,
    pub name: String,
    pub description: String,
    /// Questions in asking order.
    pub question_ids: Vec<QuestionId>,
    /// Points awarded on completing this phase.
    pub points: u32,
    /// Running total of `points` through this phase.
    pub cumulative_points: u32,
    /// Shown when the phase completes.
    pub completion_message: String,
    /// Label of the button that leaves the completion screen.
    pub call_to_action: String,
}

impl Phase {
    /// Number of questions in the phase.
    pub fn len(&self) -> usize {
        self.question_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.question_ids.is_empty()
    }

    /// Position of `id` within the phase.
    pub fn position_of(&self, id: &QuestionId) -> Option<usize> {
        self.question_ids.iter().position(|q| q == id)
    }

    /// A copy of the phase keeping only the questions `keep` accepts.
    pub fn retain_questions(&self, mut keep: impl FnMut(&QuestionId) -> bool) -> Phase {
        Phase {
            question_ids: self
                .question_ids
                .iter()
                .filter(|id| keep(id))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_phase_sizes() {
        let phases = crate::builtin::phases();
        let sizes: Vec<usize> = phases.iter().map(Phase::len).collect();
        assert_eq!(sizes, vec![14, 13, 14]);
    }

    #[test]
    fn test_position_of() {
        let phases = crate::builtin::phases();
        assert_eq!(phases[1].position_of(&QuestionId::numbered(15)), Some(0));
        assert_eq!(phases[1].position_of(&QuestionId::numbered(27)), Some(12));
        assert_eq!(phases[1].position_of(&QuestionId::numbered(28)), None);
    }

    #[test]
    fn test_retain_keeps_metadata() {
        let phase = &crate::builtin::phases()[2];
        let filtered = phase.retain_questions(|id| id.number() != Some(36));
        assert_eq!(filtered.len(), phase.len() - 1);
        assert_eq!(filtered.points, phase.points);
        assert_eq!(filtered.name, phase.name);
    }
}
