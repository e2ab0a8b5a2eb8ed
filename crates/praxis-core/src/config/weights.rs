use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Weight vector for the composite score:
/// `score = fit·ppf + adherence·A + match_quality·mean(dm, pe)`.
///
/// All weights must be non-negative; zero disables a component. Constant
/// for a scoring run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub fit: f64,
    pub adherence: f64,
    pub match_quality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            fit: defaults::DEFAULT_WEIGHT,
            adherence: defaults::DEFAULT_WEIGHT,
            match_quality: defaults::DEFAULT_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn new(fit: f64, adherence: f64, match_quality: f64) -> Self {
        Self {
            fit,
            adherence,
            match_quality,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (component, value) in [
            ("fit", self.fit),
            ("adherence", self.adherence),
            ("match_quality", self.match_quality),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { component, value });
            }
        }
        Ok(())
    }
}
