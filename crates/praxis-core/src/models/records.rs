use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PatientId, ProtocolId};
use crate::unit::UnitValue;

/// One completed (or attempted) therapy session, as logged by the platform.
///
/// `adherence` is the raw session-level compliance ratio and is validated by
/// the feature aggregator, not here — out-of-range values are a data-quality
/// issue, dropped with a warning downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub patient: PatientId,
    pub protocol: ProtocolId,
    pub session_id: i64,
    pub timestamp: DateTime<Utc>,
    pub adherence: f64,
}

/// One continuous time-series sample taken during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeseriesSample {
    pub patient: PatientId,
    pub protocol: ProtocolId,
    pub session_id: i64,
    pub timestamp: DateTime<Utc>,
    pub dm_value: f64,
    pub pe_value: f64,
}

/// Everything the engine needs about one patient, already materialized by
/// the caller. Session and timeseries streams must be chronologically
/// ordered per protocol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientData {
    pub patient: PatientId,
    pub sessions: Vec<SessionRecord>,
    pub timeseries: Vec<TimeseriesSample>,
    /// Assessment-scale name → normalized value.
    pub assessments: HashMap<String, UnitValue>,
}

impl PatientData {
    pub fn new(patient: PatientId) -> Self {
        Self {
            patient,
            ..Default::default()
        }
    }
}
