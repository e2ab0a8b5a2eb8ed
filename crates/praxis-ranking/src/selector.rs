use std::cmp::Ordering;

use tracing::debug;

use praxis_core::config::DiversifyPolicy;
use praxis_core::models::ScoredRecommendation;
use praxis_core::similarity::SimilarityMatrix;

/// Selects the final recommendation list for one patient.
///
/// Candidates are processed strictly in score order (ties broken by
/// protocol id ascending), so an accepted protocol is never displaced by a
/// later, lower-ranked near-duplicate. Zero-score candidates are never
/// recommended; the result is a prefix of the re-ranked list, at most K
/// long, never padded.
#[derive(Debug, Clone)]
pub struct RecommendationSelector {
    top_k: usize,
    policy: DiversifyPolicy,
}

struct Candidate {
    rec: ScoredRecommendation,
    penalized: bool,
}

impl RecommendationSelector {
    pub fn new(top_k: usize, policy: DiversifyPolicy) -> Self {
        Self { top_k, policy }
    }

    pub fn select(
        &self,
        candidates: Vec<ScoredRecommendation>,
        similarity: &SimilarityMatrix,
    ) -> Vec<ScoredRecommendation> {
        let mut pool: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| c.score > 0.0)
            .map(|rec| Candidate {
                rec,
                penalized: false,
            })
            .collect();
        pool.sort_by(|a, b| rank_order(&a.rec, &b.rec));

        let mut accepted: Vec<ScoredRecommendation> = Vec::new();
        while accepted.len() < self.top_k && !pool.is_empty() {
            let mut candidate = pool.remove(0);
            let max_sim = accepted
                .iter()
                .map(|a| {
                    similarity
                        .get(a.metric.protocol, candidate.rec.metric.protocol)
                        .value()
                })
                .fold(0.0, f64::max);

            match self.policy {
                DiversifyPolicy::Off => accepted.push(candidate.rec),
                DiversifyPolicy::Skip { threshold } => {
                    if max_sim > threshold {
                        debug!(
                            protocol = %candidate.rec.metric.protocol,
                            max_sim,
                            "skipping near-duplicate candidate"
                        );
                    } else {
                        accepted.push(candidate.rec);
                    }
                }
                DiversifyPolicy::Penalize { threshold, penalty } => {
                    if max_sim > threshold && !candidate.penalized {
                        candidate.rec.score *= 1.0 - penalty * max_sim;
                        candidate.penalized = true;
                        debug!(
                            protocol = %candidate.rec.metric.protocol,
                            max_sim,
                            discounted = candidate.rec.score,
                            "discounting near-duplicate candidate"
                        );
                        if candidate.rec.score > 0.0 {
                            // Re-enter the pool at the discounted rank.
                            let at = pool
                                .partition_point(|c| rank_order(&c.rec, &candidate.rec) == Ordering::Less);
                            pool.insert(at, candidate);
                        }
                    } else {
                        accepted.push(candidate.rec);
                    }
                }
            }
        }
        accepted
    }
}

/// Score descending, protocol id ascending. Total for finite scores.
fn rank_order(a: &ScoredRecommendation, b: &ScoredRecommendation) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.metric.protocol.cmp(&b.metric.protocol))
}
