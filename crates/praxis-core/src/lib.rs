//! # praxis-core
//!
//! Foundation crate for the Praxis prescription engine.
//! Defines all shared types, models, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod dimensions;
pub mod errors;
pub mod ids;
pub mod models;
pub mod similarity;
pub mod unit;

// Re-export the most commonly used types at the crate root.
pub use config::{DiversifyPolicy, EngineConfig, FrequencyPolicy, ScoringWeights};
pub use dimensions::DimensionRegistry;
pub use errors::{PraxisError, PraxisResult};
pub use ids::{PatientId, ProtocolId};
pub use models::{BalanceReport, PatientProtocolMetric, PatientSchedule, ScoredRecommendation};
pub use similarity::SimilarityMatrix;
pub use unit::UnitValue;
