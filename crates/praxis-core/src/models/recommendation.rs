use serde::{Deserialize, Serialize};

use crate::models::metric::PatientProtocolMetric;

/// A metric with its composite score and, after scheduling, its weekdays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    #[serde(flatten)]
    pub metric: PatientProtocolMetric,
    /// Weighted composite score. Comparable only within one patient's
    /// protocol set, never across patients.
    pub score: f64,
    /// Assigned weekday indices (0 = Monday … 6 = Sunday), sorted and
    /// unique. Empty until the scheduler has run.
    pub days: Vec<u8>,
}

impl ScoredRecommendation {
    pub fn new(metric: PatientProtocolMetric, score: f64) -> Self {
        Self {
            metric,
            score,
            days: Vec::new(),
        }
    }

    /// Number of weekly slots assigned so far.
    pub fn weekly_slots(&self) -> usize {
        self.days.len()
    }
}
