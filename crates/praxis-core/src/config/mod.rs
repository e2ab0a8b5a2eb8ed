//! Engine configuration.
//!
//! All knobs are caller-supplied, constant for a scoring run, and validated
//! up front: a bad configuration rejects the run before any patient is
//! scored rather than producing misleading output.

pub mod defaults;
pub mod diversify;
pub mod frequency;
pub mod weights;

pub use diversify::DiversifyPolicy;
pub use frequency::FrequencyPolicy;
pub use weights::ScoringWeights;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Full engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Composite-score weight vector.
    pub weights: ScoringWeights,
    /// EWMA smoothing factor, in (0, 1]. Later samples weigh more.
    pub alpha: f64,
    /// Maximum recommendation list size K.
    pub top_k: usize,
    /// Maximum allowed weekday load spread after scheduling.
    pub balance_tolerance: u32,
    /// Weekly-frequency rule for selected protocols.
    pub frequency: FrequencyPolicy,
    /// Near-duplicate handling during selection.
    pub diversify: DiversifyPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            alpha: defaults::DEFAULT_ALPHA,
            top_k: defaults::DEFAULT_TOP_K,
            balance_tolerance: defaults::DEFAULT_BALANCE_TOLERANCE,
            frequency: FrequencyPolicy::default(),
            diversify: DiversifyPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML. Parsing does not validate; call
    /// [`EngineConfig::validate`] (the engine constructor does).
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reject invalid configurations. Fatal at pipeline start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(ConfigError::InvalidAlpha { value: self.alpha });
        }
        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK);
        }
        self.frequency.validate()?;
        self.diversify.validate()?;
        Ok(())
    }
}
