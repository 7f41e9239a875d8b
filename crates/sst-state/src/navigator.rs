//! # Phase Navigator
//!
//! Resolves where a question sits in the questionnaire for one company
//! category, and how many points the respondent has earned so far.
//!
//! ## Filtering
//!
//! MYPE categories (micro, small) never see the exempt questions: they
//! are removed from every phase while phase order, names and points stay
//! unchanged. The standard category sees the phases as configured.
//!
//! ## Points
//!
//! ```text
//! points(phase p, index i, size n) = Σ points(phases before p) + ⌊points(p) × i / n⌋
//! ```
//!
//! The current question counts as not yet answered, so the first question
//! of phase 1 is worth 0 and the last question of phase 1 is worth
//! `⌊100 × 13 / 14⌋` for a 14-question phase.

use serde::{Deserialize, Serialize};
use sst_core::{CompanyCategory, QuestionId};
use sst_pack::{Pack, Phase};

/// The phases as seen by `category`.
pub fn filtered_phases(pack: &Pack, category: CompanyCategory) -> Vec<Phase> {
    if !category.is_mype() {
        return pack.phases().to_vec();
    }
    let catalog = pack.catalog();
    pack.phases()
        .iter()
        .map(|phase| phase.retain_questions(|id| !catalog.is_exempt_for_mype(id)))
        .collect()
}

/// Where a question sits in the filtered phase list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionPosition {
    /// 0-based index into the filtered phase list.
    pub phase_index: usize,
    /// 0-based index within the phase.
    pub index_in_phase: usize,
    /// Number of questions in the (filtered) phase.
    pub phase_size: usize,
}

impl QuestionPosition {
    /// Whether this is the first question of its phase.
    pub fn is_first_in_phase(&self) -> bool {
        self.index_in_phase == 0
    }

    /// Whether this is the last question of its phase.
    pub fn is_last_in_phase(&self) -> bool {
        self.index_in_phase + 1 == self.phase_size
    }
}

/// Fraction of a phase answered, in `[0, 1]`. Zero for an empty phase.
pub fn progress_fraction(answered_in_phase: usize, phase_size: usize) -> f64 {
    if phase_size == 0 {
        return 0.0;
    }
    answered_in_phase.min(phase_size) as f64 / phase_size as f64
}

/// Overall progress with `pointer` as the active question: `(pointer + 1) / total`.
pub fn overall_progress(pointer: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (pointer + 1).min(total) as f64 / total as f64
}

/// Navigation over the phases of one category.
///
/// Built once per assessment; lookups are linear in the number of
/// questions, which is small and fixed.
#[derive(Debug, Clone)]
pub struct PhaseNavigator {
    category: CompanyCategory,
    phases: Vec<Phase>,
    sequence: Vec<(QuestionId, QuestionPosition)>,
}

impl PhaseNavigator {
    /// The phases `category` answers, with exempt questions filtered out.
    pub fn new(pack: &Pack, category: CompanyCategory) -> Self {
        let phases = filtered_phases(pack, category);
        let sequence = phases
            .iter()
            .enumerate()
            .flat_map(|(phase_index, phase)| {
                let phase_size = phase.len();
                phase
                    .question_ids
                    .iter()
                    .enumerate()
                    .map(move |(index_in_phase, id)| {
                        (
                            id.clone(),
                            QuestionPosition {
                                phase_index,
                                index_in_phase,
                                phase_size,
                            },
                        )
                    })
            })
            .collect();
        Self {
            category,
            phases,
            sequence,
        }
    }

    pub fn category(&self) -> CompanyCategory {
        self.category
    }

    /// The filtered phases.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Phase at `index` in the filtered list.
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// Position of `id`, or `None` if it is filtered out or unknown.
    pub fn locate(&self, id: &QuestionId) -> Option<QuestionPosition> {
        self.sequence
            .iter()
            .find(|(q, _)| q == id)
            .map(|(_, position)| *position)
    }

    /// The phase containing `id`.
    pub fn current_phase(&self, id: &QuestionId) -> Option<&Phase> {
        self.locate(id).and_then(|p| self.phases.get(p.phase_index))
    }

    /// All question ids in asking order.
    pub fn flat_sequence(&self) -> impl Iterator<Item = &QuestionId> {
        self.sequence.iter().map(|(id, _)| id)
    }

    /// Number of questions asked.
    pub fn total_questions(&self) -> usize {
        self.sequence.len()
    }

    /// Question and position at `pointer` in the flat sequence.
    pub fn at(&self, pointer: usize) -> Option<(&QuestionId, QuestionPosition)> {
        self.sequence.get(pointer).map(|(id, p)| (id, *p))
    }

    /// Points earned with the question at `position` active.
    pub fn points(&self, position: QuestionPosition) -> u32 {
        let completed: u32 = self
            .phases
            .iter()
            .take(position.phase_index)
            .map(|p| p.points)
            .sum();
        let current = match self.phases.get(position.phase_index) {
            Some(phase) if position.phase_size > 0 => {
                let partial = u64::from(phase.points) * position.index_in_phase as u64
                    / position.phase_size as u64;
                u32::try_from(partial).unwrap_or(phase.points)
            }
            _ => 0,
        };
        completed.saturating_add(current)
    }

    /// Points after completing the phase at `phase_index`.
    pub fn points_after_phase(&self, phase_index: usize) -> u32 {
        self.phases
            .iter()
            .take(phase_index + 1)
            .map(|p| p.points)
            .sum()
    }

    /// Points for completing every phase.
    pub fn total_points(&self) -> u32 {
        self.phases.iter().map(|p| p.points).sum()
    }
}
