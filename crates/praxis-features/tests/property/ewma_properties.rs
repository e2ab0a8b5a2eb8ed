use chrono::{Duration, TimeZone, Utc};
use praxis_core::ids::{PatientId, ProtocolId};
use praxis_core::models::SessionRecord;
use praxis_features::{Ewma, FeatureAggregator};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ewma_stays_within_sample_bounds(
        alpha in 0.01f64..=1.0,
        samples in prop::collection::vec(0.0f64..=1.0, 1..50),
    ) {
        let mut ewma = Ewma::new(alpha);
        for &s in &samples {
            ewma.update(s);
        }
        let value = ewma.value().unwrap();
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(
            value >= min - 1e-12 && value <= max + 1e-12,
            "EWMA {} escaped sample bounds [{}, {}]",
            value, min, max
        );
    }

    #[test]
    fn constant_sequence_converges_exactly(
        alpha in 0.01f64..=1.0,
        constant in 0.0f64..=1.0,
        len in 1usize..40,
    ) {
        let mut ewma = Ewma::new(alpha);
        for _ in 0..len {
            ewma.update(constant);
        }
        prop_assert!((ewma.value().unwrap() - constant).abs() < 1e-12);
    }

    #[test]
    fn aggregated_adherence_is_bounded_even_with_junk_samples(
        alpha in 0.01f64..=1.0,
        ratios in prop::collection::vec(-2.0f64..=3.0, 0..40),
    ) {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let sessions: Vec<_> = ratios
            .iter()
            .enumerate()
            .map(|(i, &adherence)| SessionRecord {
                patient: PatientId(1),
                protocol: ProtocolId(10),
                session_id: i as i64,
                timestamp: base + Duration::hours(i as i64),
                adherence,
            })
            .collect();

        let features = FeatureAggregator::new(alpha).aggregate(&sessions, &[]);
        for f in features {
            let a = f.adherence.value();
            prop_assert!((0.0..=1.0).contains(&a), "adherence out of bounds: {}", a);
        }
    }
}
