use praxis_core::config::FrequencyPolicy;

/// Weekly slot count for one selected protocol.
///
/// `rank` is the protocol's position in the selector output (0 = best).
/// The mapping is monotonic: a better rank, higher score, or higher usage
/// never yields fewer slots. The result is clamped to 1..=7 — a protocol
/// cannot be prescribed more distinct weekdays than exist.
pub fn weekly_frequency(policy: &FrequencyPolicy, rank: usize, score: f64, usage: u32) -> u8 {
    let slots = match policy {
        FrequencyPolicy::Fixed { slots } => *slots,
        FrequencyPolicy::ByRank { slots } => slots
            .get(rank)
            .or_else(|| slots.last())
            .copied()
            .unwrap_or(1),
        FrequencyPolicy::ByScore { thresholds } => {
            1 + thresholds.iter().filter(|&&t| score >= t).count().min(6) as u8
        }
        FrequencyPolicy::ByUsage { thresholds } => {
            1 + thresholds.iter().filter(|&&t| usage >= t).count().min(6) as u8
        }
    };
    slots.clamp(1, 7)
}
