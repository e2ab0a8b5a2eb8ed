//! # praxis-features
//!
//! Feature aggregation: turns raw session records and continuous
//! time-series samples into per-(patient, protocol) behavioral signals —
//! smoothed adherence, usage counts, and smoothed difficulty/experience
//! match values.
//!
//! Malformed raw samples are a data-quality issue, not an error: they are
//! dropped with a warning and the affected protocol is treated as less (or
//! never) attempted.

pub mod aggregator;
pub mod ewma;

pub use aggregator::{FeatureAggregator, ProtocolFeatures};
pub use ewma::Ewma;
