use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Rule mapping a selected protocol to its weekly frequency (number of
/// distinct weekdays it is prescribed).
///
/// The exact rule is intentionally a configuration knob; the shipped
/// default is `by_rank` with `[3, 2, 2, 1]`. Whatever the rule yields is
/// clamped to 1..=7 at scheduling time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FrequencyPolicy {
    /// Every selected protocol gets the same number of weekly slots.
    Fixed { slots: u8 },
    /// Slots by selector rank; the last entry repeats for lower ranks.
    ByRank { slots: Vec<u8> },
    /// `1 +` the number of ascending score thresholds the protocol meets.
    ByScore { thresholds: Vec<f64> },
    /// `1 +` the number of ascending usage thresholds the protocol meets.
    ByUsage { thresholds: Vec<u32> },
}

impl Default for FrequencyPolicy {
    fn default() -> Self {
        Self::ByRank {
            slots: defaults::DEFAULT_RANK_SLOTS.to_vec(),
        }
    }
}

impl FrequencyPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Fixed { slots } => {
                if *slots == 0 {
                    return Err(ConfigError::InvalidFrequency { slots: 0 });
                }
            }
            Self::ByRank { slots } => {
                if slots.is_empty() {
                    return Err(ConfigError::EmptyFrequencyTable);
                }
                if let Some(&bad) = slots.iter().find(|&&s| s == 0) {
                    return Err(ConfigError::InvalidFrequency { slots: bad });
                }
            }
            Self::ByScore { thresholds } => {
                let ascending = thresholds.iter().all(|t| t.is_finite())
                    && thresholds.windows(2).all(|w| w[0] < w[1]);
                if !ascending {
                    return Err(ConfigError::UnsortedThresholds);
                }
            }
            Self::ByUsage { thresholds } => {
                if !thresholds.windows(2).all(|w| w[0] < w[1]) {
                    return Err(ConfigError::UnsortedUsageThresholds);
                }
            }
        }
        Ok(())
    }
}
