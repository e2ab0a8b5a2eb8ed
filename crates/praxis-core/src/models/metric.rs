use serde::{Deserialize, Serialize};

use crate::ids::{PatientId, ProtocolId};
use crate::unit::UnitValue;

/// All scored signals for one (patient, protocol) pair.
///
/// Produced fresh per scoring run and immutable thereafter. `contrib` has
/// one entry per clinical dimension (registry order) and sums to roughly
/// `ppf` before the final clamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProtocolMetric {
    pub patient: PatientId,
    pub protocol: ProtocolId,
    /// Protocol-patient fit.
    pub ppf: UnitValue,
    /// Per-dimension decomposition of `ppf`, for explainability.
    pub contrib: Vec<f64>,
    /// Exponentially smoothed adherence history.
    pub adherence: UnitValue,
    /// Difficulty-match value.
    pub dm_value: UnitValue,
    /// Patient-experience-match value.
    pub pe_value: UnitValue,
    /// Count of historical sessions in the observation window.
    pub usage: u32,
}

impl PatientProtocolMetric {
    /// A metric for a protocol the patient has never attempted and that has
    /// no dimension overlap: everything zero. Still scorable — it simply
    /// ranks low.
    pub fn unattempted(patient: PatientId, protocol: ProtocolId, dims: usize) -> Self {
        Self {
            patient,
            protocol,
            ppf: UnitValue::ZERO,
            contrib: vec![0.0; dims],
            adherence: UnitValue::ZERO,
            dm_value: UnitValue::ZERO,
            pe_value: UnitValue::ZERO,
            usage: 0,
        }
    }
}
