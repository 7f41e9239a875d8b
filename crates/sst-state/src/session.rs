//! # Assessment Session State Machine
//!
//! Drives one run of the questionnaire: records answers in order,
//! recomputes exposure after each one, and signals phase completion.
//!
//! ## States
//!
//! ```text
//! Answering(0) ──answer──▶ Answering(1) ──▶ ... ──▶ Answering(k)
//!                                                       │ last question of phase
//!                                                       ▼
//!                                               PhaseComplete(p)
//!                                                       │ continue_after_phase
//!                                   ┌───────────────────┴────────────┐
//!                                   ▼                                ▼
//!                         Answering(k + 1)                     Completed (last phase)
//!                                                                    │ mark_submitted
//!                                                                    ▼
//!                                                               Submitted
//! ```
//!
//! `back` moves the pointer one question back within the current phase.
//! At the first question of a phase it leaves the state untouched and
//! tells the caller to handle navigation itself. Answers already recorded
//! are kept either way.
//!
//! A failed submission leaves the session `Completed`, so the caller can
//! retry without re-answering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sst_core::{Answer, AnswerSet, AssessmentId, CompanyProfile, QuestionId, Soles, Timestamp};
use sst_pack::Pack;
use sst_risk::{RiskCalculator, RiskExposure};

use crate::navigator::{overall_progress, PhaseNavigator, QuestionPosition};

// ─── Session State ───────────────────────────────────────────────────

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the answer to the question at `pointer`.
    Answering { pointer: usize },
    /// The phase at `phase_index` was just completed.
    PhaseComplete { phase_index: usize },
    /// Every phase is complete; ready to submit.
    Completed,
    /// The answers were accepted by the report backend (terminal).
    Submitted,
}

impl SessionState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Answering { pointer } => write!(f, "ANSWERING[{pointer}]"),
            Self::PhaseComplete { phase_index } => write!(f, "PHASE_COMPLETE[{phase_index}]"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Submitted => write!(f, "SUBMITTED"),
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors raised by session transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The operation is not valid in the current state.
    #[error("invalid session transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target.
        to: String,
    },

    /// The session has been submitted and cannot change.
    #[error("assessment {assessment_id} is already submitted")]
    AlreadySubmitted { assessment_id: String },

    /// The profile's category leaves no questions to ask.
    #[error("no questions to ask for category {category}")]
    NoQuestions { category: String },
}

// ─── Transition Records & Outcomes ───────────────────────────────────

/// Record of a session state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTransitionRecord {
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub timestamp: Timestamp,
    pub reason: String,
}

/// Emitted when the last question of a phase is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCompletion {
    pub phase_index: usize,
    pub phase_id: u8,
    pub name: String,
    /// Points awarded by this phase.
    pub points: u32,
    /// Points accumulated through this phase.
    pub cumulative_points: u32,
    pub message: String,
    pub call_to_action: String,
    /// Whether this was the last phase.
    pub is_final: bool,
}

/// What an answer did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question: QuestionId,
    pub answer: Answer,
    /// Exposure after recording the answer.
    pub exposure: RiskExposure,
    /// Set when the answer completed a phase.
    pub phase_completed: Option<PhaseCompletion>,
}

/// What `back` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// The pointer moved back to this question.
    Moved { question: QuestionId },
    /// Already at the first question of a phase; the caller decides where
    /// to go (typically back to the profile form).
    LeaveQuestionnaire,
}

// ─── Session ─────────────────────────────────────────────────────────

/// One assessment run.
///
/// Holds the profile, the answers so far, and the latest exposure. The
/// pack is borrowed; many sessions can share one.
#[derive(Debug, Clone)]
pub struct AssessmentSession<'a> {
    id: AssessmentId,
    profile: CompanyProfile,
    calculator: RiskCalculator<'a>,
    navigator: PhaseNavigator,
    answers: AnswerSet,
    exposure: RiskExposure,
    state: SessionState,
    created_at: Timestamp,
    transitions: Vec<SessionTransitionRecord>,
}

impl<'a> AssessmentSession<'a> {
    /// Start a session at the first question.
    pub fn new(pack: &'a Pack, profile: CompanyProfile) -> Result<Self, SessionError> {
        let navigator = PhaseNavigator::new(pack, profile.category);
        if navigator.total_questions() == 0 {
            return Err(SessionError::NoQuestions {
                category: profile.category.to_string(),
            });
        }
        let calculator = RiskCalculator::new(pack);
        let answers = AnswerSet::new();
        let exposure = calculator.calculate(&answers, profile, Soles::ZERO);
        let id = AssessmentId::new();
        tracing::debug!(%id, category = %profile.category, workers = profile.workers, "assessment started");
        Ok(Self {
            id,
            profile,
            calculator,
            navigator,
            answers,
            exposure,
            state: SessionState::Answering { pointer: 0 },
            created_at: Timestamp::now(),
            transitions: Vec::new(),
        })
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn profile(&self) -> CompanyProfile {
        self.profile
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Exposure after the latest answer.
    pub fn exposure(&self) -> &RiskExposure {
        &self.exposure
    }

    pub fn navigator(&self) -> &PhaseNavigator {
        &self.navigator
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Ordered log of all state transitions.
    pub fn transitions(&self) -> &[SessionTransitionRecord] {
        &self.transitions
    }

    /// The active question and its position, while answering.
    pub fn current(&self) -> Option<(&QuestionId, QuestionPosition)> {
        match self.state {
            SessionState::Answering { pointer } => self.navigator.at(pointer),
            _ => None,
        }
    }

    /// Points earned so far.
    pub fn points(&self) -> u32 {
        match self.state {
            SessionState::Answering { pointer } => self
                .navigator
                .at(pointer)
                .map_or(0, |(_, position)| self.navigator.points(position)),
            SessionState::PhaseComplete { phase_index } => {
                self.navigator.points_after_phase(phase_index)
            }
            SessionState::Completed | SessionState::Submitted => self.navigator.total_points(),
        }
    }

    /// Overall progress through the flat question sequence, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let total = self.navigator.total_questions();
        match self.state {
            SessionState::Answering { pointer } => overall_progress(pointer, total),
            SessionState::PhaseComplete { phase_index } => {
                let answered: usize = self
                    .navigator
                    .phases()
                    .iter()
                    .take(phase_index + 1)
                    .map(|p| p.len())
                    .sum();
                overall_progress(answered.saturating_sub(1), total)
            }
            SessionState::Completed | SessionState::Submitted => 1.0,
        }
    }

    /// Record `answer` for the active question.
    ///
    /// Recomputes the exposure with the previous total as baseline, then
    /// either advances to the next question or, on the last question of a
    /// phase, enters `PhaseComplete`.
    pub fn answer(&mut self, answer: Answer) -> Result<AnswerOutcome, SessionError> {
        let pointer = self.require_answering("next question")?;
        let Some((question, position)) = self.navigator.at(pointer) else {
            return Err(self.invalid("next question"));
        };
        let question = question.clone();

        self.answers.record(question.clone(), answer);
        self.exposure = self
            .calculator
            .calculate(&self.answers, self.profile, self.exposure.total);

        let phase_completed = if position.is_last_in_phase() {
            let completion = self.phase_completion(position.phase_index);
            self.do_transition(
                SessionState::PhaseComplete {
                    phase_index: position.phase_index,
                },
                &format!("answered {question}; phase {} complete", completion.phase_id),
            );
            tracing::info!(
                id = %self.id,
                phase = completion.phase_id,
                points = completion.cumulative_points,
                exposure = %self.exposure.total,
                "phase completed"
            );
            Some(completion)
        } else {
            self.do_transition(
                SessionState::Answering {
                    pointer: pointer + 1,
                },
                &format!("answered {question}"),
            );
            None
        };

        Ok(AnswerOutcome {
            question,
            answer,
            exposure: self.exposure.clone(),
            phase_completed,
        })
    }

    /// Leave the phase-complete screen.
    ///
    /// Moves to the first question of the next phase, or to `Completed`
    /// when the finished phase was the last.
    pub fn continue_after_phase(&mut self) -> Result<SessionState, SessionError> {
        let phase_index = match self.state {
            SessionState::PhaseComplete { phase_index } => phase_index,
            SessionState::Submitted => return Err(self.already_submitted()),
            _ => return Err(self.invalid("next phase")),
        };

        let next = if phase_index + 1 >= self.navigator.phases().len() {
            tracing::info!(
                id = %self.id,
                answered = self.answers.len(),
                exposure = %self.exposure.total,
                max_severity = self.exposure.max_severity_label(),
                "assessment completed"
            );
            SessionState::Completed
        } else {
            let first_of_next: usize = self
                .navigator
                .phases()
                .iter()
                .take(phase_index + 1)
                .map(|p| p.len())
                .sum();
            SessionState::Answering {
                pointer: first_of_next,
            }
        };
        self.do_transition(next, "continued after phase completion");
        Ok(next)
    }

    /// Step back one question within the current phase.
    pub fn back(&mut self) -> Result<BackOutcome, SessionError> {
        let pointer = self.require_answering("previous question")?;
        let Some((_, position)) = self.navigator.at(pointer) else {
            return Err(self.invalid("previous question"));
        };
        if position.is_first_in_phase() {
            return Ok(BackOutcome::LeaveQuestionnaire);
        }

        let target = pointer - 1;
        let question = match self.navigator.at(target) {
            Some((id, _)) => id.clone(),
            None => return Err(self.invalid("previous question")),
        };
        self.do_transition(
            SessionState::Answering { pointer: target },
            &format!("back to {question}"),
        );
        Ok(BackOutcome::Moved { question })
    }

    /// Record that the report backend accepted the submission.
    pub fn mark_submitted(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Completed => {
                self.do_transition(SessionState::Submitted, "submission accepted");
                Ok(())
            }
            SessionState::Submitted => Err(self.already_submitted()),
            _ => Err(self.invalid("SUBMITTED")),
        }
    }

    fn phase_completion(&self, phase_index: usize) -> PhaseCompletion {
        let is_final = phase_index + 1 == self.navigator.phases().len();
        let cumulative_points = self.navigator.points_after_phase(phase_index);
        match self.navigator.phase(phase_index) {
            Some(phase) => PhaseCompletion {
                phase_index,
                phase_id: phase.id,
                name: phase.name.clone(),
                points: phase.points,
                cumulative_points,
                message: phase.completion_message.clone(),
                call_to_action: phase.call_to_action.clone(),
                is_final,
            },
            None => PhaseCompletion {
                phase_index,
                phase_id: 0,
                name: String::new(),
                points: 0,
                cumulative_points,
                message: String::new(),
                call_to_action: String::new(),
                is_final,
            },
        }
    }

    fn require_answering(&self, target: &str) -> Result<usize, SessionError> {
        match self.state {
            SessionState::Answering { pointer } => Ok(pointer),
            SessionState::Submitted => Err(self.already_submitted()),
            _ => Err(self.invalid(target)),
        }
    }

    fn invalid(&self, target: &str) -> SessionError {
        SessionError::InvalidTransition {
            from: self.state.to_string(),
            to: target.to_string(),
        }
    }

    fn already_submitted(&self) -> SessionError {
        SessionError::AlreadySubmitted {
            assessment_id: self.id.to_string(),
        }
    }

    fn do_transition(&mut self, to: SessionState, reason: &str) {
        self.transitions.push(SessionTransitionRecord {
            from_state: self.state,
            to_state: to,
            timestamp: Timestamp::now(),
            reason: reason.to_string(),
        });
        self.state = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sst_core::{CompanyCategory, ReferenceUnit, Severity};

    fn pack() -> Pack {
        Pack::load(ReferenceUnit::UIT_2026).unwrap()
    }

    fn standard(pack: &Pack) -> AssessmentSession<'_> {
        AssessmentSession::new(pack, CompanyProfile::new(CompanyCategory::Standard, 150)).unwrap()
    }

    fn answer_n(session: &mut AssessmentSession<'_>, n: usize, answer: Answer) {
        for _ in 0..n {
            session.answer(answer).unwrap();
        }
    }

    // ── Forward progress ─────────────────────────────────────────────

    #[test]
    fn test_starts_at_first_question() {
        let pack = pack();
        let s = standard(&pack);
        assert_eq!(s.state(), SessionState::Answering { pointer: 0 });
        assert_eq!(s.current().map(|(id, _)| id.as_str()), Some("q1"));
        assert_eq!(s.points(), 0);
        assert!(s.transitions().is_empty());
    }

    #[test]
    fn test_answer_advances_and_recomputes() {
        let pack = pack();
        let mut s = standard(&pack);
        let outcome = s.answer(Answer::No).unwrap();
        assert_eq!(outcome.question.as_str(), "q1");
        assert_eq!(outcome.exposure.total, Soles::from_soles(82_170));
        assert_eq!(outcome.exposure.delta, Soles::from_soles(82_170));
        assert!(outcome.phase_completed.is_none());
        assert_eq!(s.state(), SessionState::Answering { pointer: 1 });
        assert_eq!(s.transitions().len(), 1);
    }

    #[test]
    fn test_delta_uses_previous_total() {
        let pack = pack();
        let mut s = standard(&pack);
        s.answer(Answer::No).unwrap();
        let outcome = s.answer(Answer::Yes).unwrap();
        assert_eq!(outcome.exposure.total, Soles::from_soles(82_170));
        assert_eq!(outcome.exposure.delta, Soles::ZERO);
    }

    #[test]
    fn test_phase_complete_on_last_question_of_phase() {
        let pack = pack();
        let mut s = standard(&pack);
        answer_n(&mut s, 13, Answer::Yes);
        let outcome = s.answer(Answer::Yes).unwrap();
        let completion = outcome.phase_completed.unwrap();
        assert_eq!(completion.phase_id, 1);
        assert_eq!(completion.cumulative_points, 100);
        assert!(!completion.is_final);
        assert_eq!(s.state(), SessionState::PhaseComplete { phase_index: 0 });
        assert_eq!(s.points(), 100);
    }

    #[test]
    fn test_continue_moves_to_next_phase() {
        let pack = pack();
        let mut s = standard(&pack);
        answer_n(&mut s, 14, Answer::Yes);
        let next = s.continue_after_phase().unwrap();
        assert_eq!(next, SessionState::Answering { pointer: 14 });
        assert_eq!(s.current().map(|(id, _)| id.as_str()), Some("q15"));
        assert_eq!(s.points(), 100);
    }

    #[test]
    fn test_full_run_completes_and_submits() {
        let pack = pack();
        let mut s =
            AssessmentSession::new(&pack, CompanyProfile::new(CompanyCategory::Micro, 4)).unwrap();
        let mut completions = Vec::new();
        loop {
            match s.state() {
                SessionState::Answering { .. } => {
                    if let Some(c) = s.answer(Answer::No).unwrap().phase_completed {
                        completions.push(c);
                    }
                }
                SessionState::PhaseComplete { .. } => {
                    s.continue_after_phase().unwrap();
                }
                SessionState::Completed => break,
                SessionState::Submitted => unreachable!(),
            }
        }
        let ids: Vec<u8> = completions.iter().map(|c| c.phase_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(completions[2].is_final);
        assert_eq!(s.answers().len(), 36);
        assert_eq!(s.exposure().max_severity, Some(Severity::VeryGrave));
        assert_eq!(s.points(), 600);
        assert_eq!(s.progress(), 1.0);

        s.mark_submitted().unwrap();
        assert!(s.state().is_terminal());
        assert!(matches!(
            s.mark_submitted(),
            Err(SessionError::AlreadySubmitted { .. })
        ));
        assert!(matches!(
            s.answer(Answer::Yes),
            Err(SessionError::AlreadySubmitted { .. })
        ));
    }

    // ── Invalid transitions ──────────────────────────────────────────

    #[test]
    fn test_answer_rejected_while_phase_complete() {
        let pack = pack();
        let mut s = standard(&pack);
        answer_n(&mut s, 14, Answer::Yes);
        assert!(matches!(
            s.answer(Answer::Yes),
            Err(SessionError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_continue_rejected_while_answering() {
        let pack = pack();
        let mut s = standard(&pack);
        let err = s.continue_after_phase().unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                from: "ANSWERING[0]".to_string(),
                to: "next phase".to_string()
            }
        );
    }

    #[test]
    fn test_submit_rejected_before_completion() {
        let pack = pack();
        let mut s = standard(&pack);
        assert!(s.mark_submitted().is_err());
        assert_eq!(s.state(), SessionState::Answering { pointer: 0 });
    }

    // ── Back navigation ──────────────────────────────────────────────

    #[test]
    fn test_back_within_phase_keeps_answers() {
        let pack = pack();
        let mut s = standard(&pack);
        answer_n(&mut s, 2, Answer::No);
        let outcome = s.back().unwrap();
        assert_eq!(
            outcome,
            BackOutcome::Moved {
                question: QuestionId::numbered(2)
            }
        );
        assert_eq!(s.state(), SessionState::Answering { pointer: 1 });
        assert_eq!(s.answers().len(), 2);

        // Re-answering overwrites.
        s.answer(Answer::Yes).unwrap();
        assert_eq!(s.answers().get(&QuestionId::numbered(2)), Some(Answer::Yes));
        assert_eq!(s.answers().len(), 2);
    }

    #[test]
    fn test_back_at_first_question_defers_to_caller() {
        let pack = pack();
        let mut s = standard(&pack);
        assert_eq!(s.back().unwrap(), BackOutcome::LeaveQuestionnaire);
        assert_eq!(s.state(), SessionState::Answering { pointer: 0 });
    }

    #[test]
    fn test_back_stops_at_phase_boundary() {
        let pack = pack();
        let mut s = standard(&pack);
        answer_n(&mut s, 14, Answer::Yes);
        s.continue_after_phase().unwrap();
        assert_eq!(s.back().unwrap(), BackOutcome::LeaveQuestionnaire);
        assert_eq!(s.state(), SessionState::Answering { pointer: 14 });
    }

    #[test]
    fn test_transitions_are_logged_in_order() {
        let pack = pack();
        let mut s = standard(&pack);
        answer_n(&mut s, 2, Answer::Yes);
        s.back().unwrap();
        let states: Vec<SessionState> = s.transitions().iter().map(|t| t.to_state).collect();
        assert_eq!(
            states,
            vec![
                SessionState::Answering { pointer: 1 },
                SessionState::Answering { pointer: 2 },
                SessionState::Answering { pointer: 1 },
            ]
        );
        assert!(s
            .transitions()
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
        assert!(s.created_at() <= s.transitions()[0].timestamp);
    }

    #[test]
    fn test_progress() {
        let pack = pack();
        let mut s = standard(&pack);
        assert_eq!(s.progress(), 1.0 / 41.0);
        answer_n(&mut s, 14, Answer::Yes);
        assert_eq!(s.progress(), 14.0 / 41.0);
    }
}
