//! Error taxonomy.
//!
//! Data-quality problems in raw samples are recovered locally (dropped with
//! a warning) and never surface here. Configuration errors are fatal at
//! engine construction; invariant violations surface from the scheduling
//! pass. Both propagate to the caller.

pub mod config_error;
pub mod schedule_error;

pub use config_error::ConfigError;
pub use schedule_error::ScheduleError;

/// Top-level error type wrapping all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum PraxisError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("scheduling error: {0}")]
    Schedule(#[from] ScheduleError),
}

/// Convenience result alias used across the workspace.
pub type PraxisResult<T> = Result<T, PraxisError>;
