use serde::{Deserialize, Serialize};

use crate::ids::PatientId;
use crate::models::recommendation::ScoredRecommendation;

/// Per-weekday load summary for one patient's scheduling pass, with the
/// balance-contract verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Prescribed-slot count per weekday (0 = Monday … 6 = Sunday).
    pub day_counts: [u32; 7],
    /// Total slots across all protocols.
    pub total_slots: u32,
    /// Mean load per weekday (`total_slots / 7`).
    pub mean_load: f64,
    /// `max(day_counts) − min(day_counts)`.
    pub spread: u32,
    /// Tolerance the contract was checked against.
    pub tolerance: u32,
    /// Whether the balance contract held.
    pub holds: bool,
}

impl BalanceReport {
    /// Evaluate the balance contract for a finished day-count state.
    pub fn evaluate(day_counts: [u32; 7], tolerance: u32) -> Self {
        let total_slots: u32 = day_counts.iter().sum();
        let max = day_counts.iter().copied().max().unwrap_or(0);
        let min = day_counts.iter().copied().min().unwrap_or(0);
        let spread = max - min;
        Self {
            day_counts,
            total_slots,
            mean_load: f64::from(total_slots) / 7.0,
            spread,
            tolerance,
            holds: spread <= tolerance,
        }
    }
}

/// One patient's finished weekly prescription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSchedule {
    pub patient: PatientId,
    /// Selected recommendations with their day assignments, in rank order.
    pub items: Vec<ScoredRecommendation>,
    pub report: BalanceReport,
}

impl PatientSchedule {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
