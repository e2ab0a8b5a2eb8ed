//! Data models shared across the workspace.

pub mod metric;
pub mod records;
pub mod recommendation;
pub mod schedule;

pub use metric::PatientProtocolMetric;
pub use records::{PatientData, SessionRecord, TimeseriesSample};
pub use recommendation::ScoredRecommendation;
pub use schedule::{BalanceReport, PatientSchedule};
