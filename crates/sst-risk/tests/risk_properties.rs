//! Scoring properties over arbitrary answer sets and profiles.

use proptest::prelude::*;
use sst_core::{Answer, AnswerSet, CompanyCategory, CompanyProfile, QuestionId, ReferenceUnit, Soles};
use sst_pack::Pack;
use sst_risk::RiskCalculator;

fn pack() -> Pack {
    Pack::load(ReferenceUnit::UIT_2026).unwrap()
}

fn category() -> impl Strategy<Value = CompanyCategory> {
    prop_oneof![
        Just(CompanyCategory::Micro),
        Just(CompanyCategory::Small),
        Just(CompanyCategory::Standard),
    ]
}

fn answer() -> impl Strategy<Value = Answer> {
    prop_oneof![Just(Answer::Yes), Just(Answer::No)]
}

/// Answers over the catalog plus a few ids it does not know.
fn answer_set() -> impl Strategy<Value = AnswerSet> {
    prop::collection::btree_map(1u32..=45, answer(), 0..45).prop_map(|m| {
        m.into_iter()
            .map(|(n, a)| (QuestionId::numbered(n), a))
            .collect()
    })
}

// =========================================================================
// End-to-end
// =========================================================================

#[test]
fn standard_150_workers_very_grave_then_serious() {
    let pack = pack();
    let calc = RiskCalculator::new(&pack);
    let profile = CompanyProfile::new(CompanyCategory::Standard, 150);

    let mut answers = AnswerSet::new();
    answers.record(QuestionId::numbered(28), Answer::No);
    let first = calc.calculate(&answers, profile, Soles::ZERO);
    assert_eq!(first.total, Soles::from_soles(175_065));
    assert_eq!(first.delta, Soles::from_soles(175_065));
    assert_eq!(first.total.to_string(), "S/ 175,065");

    answers.record(QuestionId::numbered(1), Answer::No);
    let second = calc.calculate(&answers, profile, first.total);
    assert_eq!(second.delta, Soles::from_soles(82_170));
    assert_eq!(second.total, Soles::from_soles(257_235));
    assert_eq!(second.max_severity_label(), "Muy Grave");
}

#[test]
fn small_company_all_no_skips_exempt_questions() {
    let pack = pack();
    let calc = RiskCalculator::new(&pack);
    let all_no: AnswerSet = (1..=41)
        .map(|n| (QuestionId::numbered(n), Answer::No))
        .collect();
    let exposure = calc.calculate(&all_no, CompanyProfile::new(CompanyCategory::Small, 6), Soles::ZERO);

    // q36, q37, q41 Grave and q38, q39 Leves are exempt.
    assert_eq!(exposure.counts.minor, 5);
    assert_eq!(exposure.counts.serious, 27);
    assert_eq!(exposure.counts.very_grave, 4);
    assert_eq!(
        exposure.total,
        Soles::from_centimos(5 * 74_900 + 27 * 315_650 + 4 * 674_200)
    );
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    /// Flipping any answer from yes to no never lowers the total, and
    /// flipping back never raises it.
    #[test]
    fn monotone_in_negative_answers(
        set in answer_set(),
        cat in category(),
        workers in -5i64..1_200,
        flip in 1u32..=41,
    ) {
        let pack = pack();
        let calc = RiskCalculator::new(&pack);
        let profile = CompanyProfile::new(cat, workers);
        let id = QuestionId::numbered(flip);

        let mut yes = set.clone();
        yes.record(id.clone(), Answer::Yes);
        let mut no = set;
        no.record(id, Answer::No);

        let t_yes = calc.calculate(&yes, profile, Soles::ZERO).total;
        let t_no = calc.calculate(&no, profile, Soles::ZERO).total;
        prop_assert!(t_yes <= t_no);
    }

    /// The delta equals `max(0, total − previous)`.
    #[test]
    fn delta_is_clamped(
        set in answer_set(),
        cat in category(),
        workers in 1i64..1_200,
        previous in 0u64..100_000_000,
    ) {
        let pack = pack();
        let calc = RiskCalculator::new(&pack);
        let previous = Soles::from_centimos(previous);
        let exposure = calc.calculate(&set, CompanyProfile::new(cat, workers), previous);
        if exposure.total > previous {
            prop_assert_eq!(exposure.delta, exposure.total.saturating_sub(previous));
            prop_assert!(exposure.is_increase());
        } else {
            prop_assert_eq!(exposure.delta, Soles::ZERO);
        }
    }

    /// Exempt questions never appear in a MYPE breakdown, and answering
    /// them changes nothing.
    #[test]
    fn exempt_questions_ignored_for_mype(
        set in answer_set(),
        mype in prop_oneof![Just(CompanyCategory::Micro), Just(CompanyCategory::Small)],
        workers in 1i64..200,
    ) {
        let pack = pack();
        let calc = RiskCalculator::new(&pack);
        let profile = CompanyProfile::new(mype, workers);
        let exposure = calc.calculate(&set, profile, Soles::ZERO);
        for flagged in &exposure.breakdown {
            prop_assert!(!pack.catalog().is_exempt_for_mype(&flagged.id));
        }

        let mut without_exempt = set.clone();
        for id in pack.catalog().exempt_ids() {
            without_exempt.remove(id);
        }
        prop_assert_eq!(calc.calculate(&without_exempt, profile, Soles::ZERO).total, exposure.total);
    }

    /// The total is the literal sum of per-question unit fines.
    #[test]
    fn total_is_sum_of_unit_fines(set in answer_set(), cat in category(), workers in -3i64..1_200) {
        let pack = pack();
        let calc = RiskCalculator::new(&pack);
        let profile = CompanyProfile::new(cat, workers);
        let exposure = calc.calculate(&set, profile, Soles::ZERO);

        let expected: Soles = set.negatives().map(|id| calc.unit_fine_for(id, profile)).sum();
        prop_assert_eq!(exposure.total, expected);
        prop_assert_eq!(exposure.breakdown.len() as u32, exposure.counts.total());
        prop_assert_eq!(
            exposure.max_severity,
            exposure.breakdown.iter().map(|f| f.severity).max()
        );
    }
}
