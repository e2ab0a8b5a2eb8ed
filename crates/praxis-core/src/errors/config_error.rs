/// Configuration errors. All of these reject the run at engine
/// construction, before any patient is scored.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("scoring weight '{component}' must be a non-negative finite number, got {value}")]
    InvalidWeight { component: &'static str, value: f64 },

    #[error("smoothing factor alpha must be in (0, 1], got {value}")]
    InvalidAlpha { value: f64 },

    #[error("recommendation list size K must be at least 1")]
    InvalidTopK,

    #[error("frequency table must contain at least one entry")]
    EmptyFrequencyTable,

    #[error("weekly frequency entries must be at least 1, got {slots}")]
    InvalidFrequency { slots: u8 },

    #[error("score thresholds must be finite and strictly ascending")]
    UnsortedThresholds,

    #[error("usage thresholds must be strictly ascending")]
    UnsortedUsageThresholds,

    #[error("similarity threshold must be in [0, 1], got {value}")]
    InvalidThreshold { value: f64 },

    #[error("similarity penalty must be in [0, 1], got {value}")]
    InvalidPenalty { value: f64 },

    #[error("unknown clinical dimension '{name}'")]
    UnknownDimension { name: String },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
