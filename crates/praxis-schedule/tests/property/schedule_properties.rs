use praxis_core::config::FrequencyPolicy;
use praxis_core::ids::{PatientId, ProtocolId};
use praxis_core::models::{PatientProtocolMetric, ScoredRecommendation};
use praxis_schedule::WeekScheduler;
use proptest::prelude::*;

fn recommendations(scores: &[f64]) -> Vec<ScoredRecommendation> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| {
            ScoredRecommendation::new(
                PatientProtocolMetric::unattempted(PatientId(1), ProtocolId(i as i64 + 100), 3),
                score,
            )
        })
        .collect()
}

fn arb_policy() -> impl Strategy<Value = FrequencyPolicy> {
    prop_oneof![
        (1u8..=7).prop_map(|slots| FrequencyPolicy::Fixed { slots }),
        prop::collection::vec(1u8..=4, 1..5).prop_map(|slots| FrequencyPolicy::ByRank { slots }),
        prop::collection::vec(0.5f64..3.0, 0..3).prop_map(|mut thresholds| {
            thresholds.sort_by(|a, b| a.partial_cmp(b).unwrap());
            thresholds.dedup();
            FrequencyPolicy::ByScore { thresholds }
        }),
    ]
}

proptest! {
    // The central contract: however many protocols are selected and
    // whatever the frequency rule says, the weekly spread never exceeds 1.
    #[test]
    fn balance_spread_never_exceeds_one(
        scores in prop::collection::vec(0.1f64..3.0, 0..12),
        policy in arb_policy(),
    ) {
        let scheduler = WeekScheduler::new(policy, 1);
        let (scheduled, report) = scheduler
            .schedule(recommendations(&scores))
            .expect("balance contract must hold");
        prop_assert!(report.holds);
        prop_assert!(report.spread <= 1);

        let slots: u32 = scheduled.iter().map(|r| r.days.len() as u32).sum();
        prop_assert_eq!(slots, report.total_slots);
    }

    #[test]
    fn every_protocol_gets_distinct_in_range_days(
        scores in prop::collection::vec(0.1f64..3.0, 1..12),
        policy in arb_policy(),
    ) {
        let scheduler = WeekScheduler::new(policy, 1);
        let (scheduled, _) = scheduler.schedule(recommendations(&scores)).unwrap();
        for rec in &scheduled {
            prop_assert!(!rec.days.is_empty());
            prop_assert!(rec.days.iter().all(|&d| d < 7));
            let mut sorted = rec.days.clone();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), rec.days.len(), "duplicate weekday");
        }
    }

    #[test]
    fn repeated_runs_are_byte_identical(
        scores in prop::collection::vec(0.1f64..3.0, 0..10),
        policy in arb_policy(),
    ) {
        let scheduler = WeekScheduler::new(policy, 1);
        let input = recommendations(&scores);
        let (a, ra) = scheduler.schedule(input.clone()).unwrap();
        let (b, rb) = scheduler.schedule(input).unwrap();
        prop_assert_eq!(ra.day_counts, rb.day_counts);
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(&x.days, &y.days);
        }
    }
}
