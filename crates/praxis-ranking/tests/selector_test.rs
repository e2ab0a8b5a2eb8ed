use praxis_core::config::DiversifyPolicy;
use praxis_core::ids::{PatientId, ProtocolId};
use praxis_core::models::{PatientProtocolMetric, ScoredRecommendation};
use praxis_core::similarity::SimilarityMatrix;
use praxis_core::unit::UnitValue;
use praxis_ranking::RecommendationSelector;

fn rec(protocol: i64, score: f64) -> ScoredRecommendation {
    ScoredRecommendation::new(
        PatientProtocolMetric::unattempted(PatientId(775), ProtocolId(protocol), 3),
        score,
    )
}

fn ids(recs: &[ScoredRecommendation]) -> Vec<i64> {
    recs.iter().map(|r| r.metric.protocol.0).collect()
}

#[test]
fn orders_by_score_descending() {
    let selector = RecommendationSelector::new(10, DiversifyPolicy::Off);
    let out = selector.select(
        vec![rec(1, 0.4), rec(2, 1.9), rec(3, 1.1)],
        &SimilarityMatrix::new(),
    );
    assert_eq!(ids(&out), vec![2, 3, 1]);
}

#[test]
fn ties_break_by_protocol_id_ascending() {
    let selector = RecommendationSelector::new(10, DiversifyPolicy::Off);
    let out = selector.select(
        vec![rec(9, 1.0), rec(2, 1.0), rec(5, 1.0)],
        &SimilarityMatrix::new(),
    );
    assert_eq!(ids(&out), vec![2, 5, 9]);
}

#[test]
fn truncates_to_k() {
    let selector = RecommendationSelector::new(2, DiversifyPolicy::Off);
    let out = selector.select(
        vec![rec(1, 3.0), rec(2, 2.0), rec(3, 1.0)],
        &SimilarityMatrix::new(),
    );
    assert_eq!(ids(&out), vec![1, 2]);
}

#[test]
fn zero_score_candidates_are_never_recommended() {
    let selector = RecommendationSelector::new(5, DiversifyPolicy::Off);
    let out = selector.select(
        vec![rec(1, 0.0), rec(2, 0.7), rec(3, 0.0)],
        &SimilarityMatrix::new(),
    );
    // Shorter than K, not padded.
    assert_eq!(ids(&out), vec![2]);
}

#[test]
fn skip_mode_drops_near_duplicates() {
    let mut sim = SimilarityMatrix::new();
    sim.insert(ProtocolId(1), ProtocolId(2), UnitValue::new(0.95));

    let selector = RecommendationSelector::new(5, DiversifyPolicy::Skip { threshold: 0.9 });
    let out = selector.select(
        vec![rec(1, 2.0), rec(2, 1.8), rec(3, 1.0)],
        &sim,
    );
    // 2 is a near-duplicate of the accepted 1 and is skipped outright.
    assert_eq!(ids(&out), vec![1, 3]);
}

#[test]
fn penalize_mode_discounts_and_reranks() {
    let mut sim = SimilarityMatrix::new();
    sim.insert(ProtocolId(1), ProtocolId(2), UnitValue::new(1.0));

    let selector = RecommendationSelector::new(5, DiversifyPolicy::Penalize {
        threshold: 0.9,
        penalty: 0.5,
    });
    let out = selector.select(
        vec![rec(1, 2.0), rec(2, 1.8), rec(3, 1.0)],
        &sim,
    );
    // 2 is discounted to 0.9 and falls behind 3, but is still recommended.
    assert_eq!(ids(&out), vec![1, 3, 2]);
    assert!((out[2].score - 0.9).abs() < 1e-12);
}

#[test]
fn higher_ranked_items_are_never_displaced() {
    let mut sim = SimilarityMatrix::new();
    sim.insert(ProtocolId(1), ProtocolId(2), UnitValue::new(1.0));

    let selector = RecommendationSelector::new(1, DiversifyPolicy::Penalize {
        threshold: 0.9,
        penalty: 1.0,
    });
    let out = selector.select(vec![rec(1, 2.0), rec(2, 1.8)], &sim);
    assert_eq!(ids(&out), vec![1]);
}

#[test]
fn full_penalty_on_identical_protocol_drops_it() {
    let mut sim = SimilarityMatrix::new();
    sim.insert(ProtocolId(1), ProtocolId(2), UnitValue::new(1.0));

    let selector = RecommendationSelector::new(5, DiversifyPolicy::Penalize {
        threshold: 0.5,
        penalty: 1.0,
    });
    // penalty·sim = 1.0 → discounted score 0 → excluded like any zero score.
    let out = selector.select(vec![rec(1, 2.0), rec(2, 1.8)], &sim);
    assert_eq!(ids(&out), vec![1]);
}

#[test]
fn empty_candidate_set_yields_empty_list() {
    let selector = RecommendationSelector::new(5, DiversifyPolicy::Off);
    assert!(selector.select(vec![], &SimilarityMatrix::new()).is_empty());
}

#[test]
fn selection_is_deterministic() {
    let mut sim = SimilarityMatrix::new();
    sim.insert(ProtocolId(3), ProtocolId(4), UnitValue::new(0.92));

    let candidates = vec![rec(4, 1.2), rec(3, 1.3), rec(8, 0.4), rec(6, 1.2)];
    let selector = RecommendationSelector::new(3, DiversifyPolicy::Penalize {
        threshold: 0.9,
        penalty: 0.3,
    });
    let a = selector.select(candidates.clone(), &sim);
    let b = selector.select(candidates, &sim);
    assert_eq!(ids(&a), ids(&b));
    let scores_a: Vec<u64> = a.iter().map(|r| r.score.to_bits()).collect();
    let scores_b: Vec<u64> = b.iter().map(|r| r.score.to_bits()).collect();
    assert_eq!(scores_a, scores_b);
}
