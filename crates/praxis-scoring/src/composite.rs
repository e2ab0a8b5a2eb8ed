use serde::{Deserialize, Serialize};

use praxis_core::config::ScoringWeights;
use praxis_core::models::PatientProtocolMetric;

/// Per-component decomposition of a composite score, for explainability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub fit_term: f64,
    pub adherence_term: f64,
    pub match_term: f64,
    pub score: f64,
}

/// Combines fit, adherence, and match quality into one scalar:
///
/// ```text
/// score = w_fit·ppf + w_adh·adherence + w_match·mean(dm, pe)
/// ```
///
/// Purely arithmetic: identical inputs and weights always yield an
/// identical score. Scores are comparable only within a single patient's
/// protocol set — there is no cross-patient normalization.
#[derive(Debug, Clone, Copy)]
pub struct CompositeScorer {
    weights: ScoringWeights,
}

impl CompositeScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, metric: &PatientProtocolMetric) -> f64 {
        self.breakdown(metric).score
    }

    pub fn breakdown(&self, metric: &PatientProtocolMetric) -> ScoreBreakdown {
        let fit_term = self.weights.fit * metric.ppf.value();
        let adherence_term = self.weights.adherence * metric.adherence.value();
        let match_term =
            self.weights.match_quality * match_quality(metric.dm_value.value(), metric.pe_value.value());
        ScoreBreakdown {
            fit_term,
            adherence_term,
            match_term,
            score: fit_term + adherence_term + match_term,
        }
    }
}

/// Difficulty-match and experience-match combine as their mean.
fn match_quality(dm: f64, pe: f64) -> f64 {
    (dm + pe) / 2.0
}
