//! Default configuration values.

/// Equal-influence default for all scoring weights.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// EWMA smoothing factor.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Maximum recommendation list size.
pub const DEFAULT_TOP_K: usize = 5;

/// Maximum allowed deviation of any weekday's load from the weekly
/// minimum after scheduling.
pub const DEFAULT_BALANCE_TOLERANCE: u32 = 1;

/// Default rank → weekly-slot table: top protocol three days a week, the
/// next two protocols two days, everything else one. The last entry
/// repeats for all lower ranks.
pub const DEFAULT_RANK_SLOTS: [u8; 4] = [3, 2, 2, 1];
