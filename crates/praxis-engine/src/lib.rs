//! # praxis-engine
//!
//! The per-patient prescription pipeline, staged as:
//!
//! ```text
//! raw records → features → fit → composite score → selection → weekly schedule
//! ```
//!
//! Each patient's pipeline is pure and independent of every other
//! patient's; [`PrescriptionEngine::schedule_patients`] fans out across
//! patients with rayon and collects results in input order, so repeated
//! runs are byte-identical.

pub mod engine;
pub mod export;

pub use engine::PrescriptionEngine;
pub use export::{to_rows, PrescriptionRow};
