use tracing::{debug, error};

use praxis_core::config::FrequencyPolicy;
use praxis_core::errors::ScheduleError;
use praxis_core::models::{BalanceReport, ScoredRecommendation};

use crate::frequency::weekly_frequency;

/// Running weekday-load state for one patient's scheduling pass.
///
/// One instance is threaded through the whole pass; every slot decision
/// reads the cumulative counts, which is what makes the global balance
/// contract achievable. Tie-breaking prefers the least-recently-assigned
/// day, then the lowest index, so repeated runs are byte-identical.
#[derive(Debug, Clone)]
pub struct WeeklyAllocation {
    day_counts: [u32; 7],
    last_assigned: [u64; 7],
    clock: u64,
}

impl Default for WeeklyAllocation {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklyAllocation {
    pub fn new() -> Self {
        Self {
            day_counts: [0; 7],
            last_assigned: [0; 7],
            clock: 0,
        }
    }

    /// Assign `freq` distinct weekdays, greedily taking the least-loaded
    /// eligible day one slot at a time. Returns the days sorted ascending.
    pub fn assign_days(&mut self, freq: u8) -> Vec<u8> {
        let freq = usize::from(freq.clamp(1, 7));
        let mut used = [false; 7];
        let mut days = Vec::with_capacity(freq);
        for _ in 0..freq {
            let day = self.pick_day(&used);
            used[usize::from(day)] = true;
            days.push(day);
        }
        days.sort_unstable();
        days
    }

    /// Current per-weekday load.
    pub fn day_counts(&self) -> [u32; 7] {
        self.day_counts
    }

    /// Evaluate the balance contract against the current state.
    pub fn report(&self, tolerance: u32) -> BalanceReport {
        BalanceReport::evaluate(self.day_counts, tolerance)
    }

    /// Least-loaded day not yet used by the current protocol; ties broken
    /// by least-recently-assigned, then lowest index.
    fn pick_day(&mut self, used: &[bool; 7]) -> u8 {
        let day = (0..7u8)
            .filter(|&d| !used[usize::from(d)])
            .min_by_key(|&d| {
                let i = usize::from(d);
                (self.day_counts[i], self.last_assigned[i], d)
            })
            .expect("a protocol never requests more than 7 distinct days");
        let i = usize::from(day);
        self.day_counts[i] += 1;
        self.clock += 1;
        self.last_assigned[i] = self.clock;
        day
    }
}

/// Assigns weekdays to a patient's selected recommendations.
#[derive(Debug, Clone)]
pub struct WeekScheduler {
    policy: FrequencyPolicy,
    tolerance: u32,
}

impl WeekScheduler {
    pub fn new(policy: FrequencyPolicy, tolerance: u32) -> Self {
        Self { policy, tolerance }
    }

    /// Fill in `days` for every recommendation, in selector order, and
    /// check the balance contract.
    ///
    /// A spread beyond tolerance is a scheduler defect and surfaces as
    /// [`ScheduleError::BalanceViolated`] instead of an ordinary result.
    pub fn schedule(
        &self,
        mut recommendations: Vec<ScoredRecommendation>,
    ) -> Result<(Vec<ScoredRecommendation>, BalanceReport), ScheduleError> {
        let mut allocation = WeeklyAllocation::new();
        for (rank, rec) in recommendations.iter_mut().enumerate() {
            let freq = weekly_frequency(&self.policy, rank, rec.score, rec.metric.usage);
            rec.days = allocation.assign_days(freq);
            debug!(
                protocol = %rec.metric.protocol,
                rank,
                days = ?rec.days,
                "assigned weekly slots"
            );
        }

        let report = allocation.report(self.tolerance);
        if report.holds {
            Ok((recommendations, report))
        } else {
            error!(
                spread = report.spread,
                tolerance = report.tolerance,
                day_counts = ?report.day_counts,
                "weekly balance contract violated"
            );
            Err(ScheduleError::BalanceViolated { report })
        }
    }
}
