use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Near-duplicate handling during recommendation selection.
///
/// Applied in score order, so an accepted higher-ranked protocol is never
/// displaced by a later near-duplicate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DiversifyPolicy {
    /// No diversification.
    #[default]
    Off,
    /// Drop a candidate whose similarity to any accepted protocol exceeds
    /// the threshold.
    Skip { threshold: f64 },
    /// Discount such a candidate's score once by
    /// `score × (1 − penalty·similarity)` and let it re-compete.
    Penalize { threshold: f64, penalty: f64 },
}

impl DiversifyPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Off => Ok(()),
            Self::Skip { threshold } => check_unit(threshold, false),
            Self::Penalize { threshold, penalty } => {
                check_unit(threshold, false)?;
                check_unit(penalty, true)
            }
        }
    }
}

fn check_unit(value: f64, is_penalty: bool) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else if is_penalty {
        Err(ConfigError::InvalidPenalty { value })
    } else {
        Err(ConfigError::InvalidThreshold { value })
    }
}
