//! # Built-in Pack Data
//!
//! The fixed question catalog, phase grouping, and fine tables the
//! diagnosis ships with. Data only; [`crate::Pack::load`] turns it into
//! validated structures.

use std::ops::RangeInclusive;

use sst_core::{QuestionId, Severity};

use crate::catalog::{Question, Tooltip};
use crate::phases::Phase;

pub(crate) mod fines;
mod phases;
mod questions;

pub(crate) struct QuestionDef {
    number: u32,
    severity: Severity,
    exempt_for_mype: bool,
    text: &'static str,
    definition: &'static str,
    legal_risk: &'static str,
}

pub(crate) struct PhaseDef {
    id: u8,
    name: &'static str,
    description: &'static str,
    questions: RangeInclusive<u32>,
    points: u32,
    cumulative_points: u32,
    completion_message: &'static str,
    call_to_action: &'static str,
}

/// The built-in questions, in catalog order.
pub(crate) fn questions() -> Vec<Question> {
    questions::QUESTIONS
        .iter()
        .map(|def| Question {
            id: QuestionId::numbered(def.number),
            severity: def.severity,
            exempt_for_mype: def.exempt_for_mype,
            text: def.text.to_string(),
            tooltip: Some(Tooltip {
                definition: def.definition.to_string(),
                legal_risk: def.legal_risk.to_string(),
            }),
        })
        .collect()
}

/// The built-in phases, in questionnaire order.
pub(crate) fn phases() -> Vec<Phase> {
    phases::PHASES
        .iter()
        .map(|def| Phase {
            id: def.id,
            name: def.name.to_string(),
            description: def.description.to_string(),
            question_ids: def.questions.clone().map(QuestionId::numbered).collect(),
            points: def.points,
            cumulative_points: def.cumulative_points,
            completion_message: def.completion_message.to_string(),
            call_to_action: def.call_to_action.to_string(),
        })
        .collect()
}
