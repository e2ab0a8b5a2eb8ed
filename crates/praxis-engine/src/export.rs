use serde::{Deserialize, Serialize};

use praxis_core::ids::{PatientId, ProtocolId};
use praxis_core::models::PatientSchedule;

/// One row of the flat prescription table handed to external consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionRow {
    pub patient: PatientId,
    pub protocol: ProtocolId,
    pub ppf: f64,
    pub contrib: Vec<f64>,
    pub adherence: f64,
    pub dm_value: f64,
    pub pe_value: f64,
    pub usage: u32,
    pub days: Vec<u8>,
    pub score: f64,
}

/// Flatten a finished schedule into table rows, in rank order.
pub fn to_rows(schedule: &PatientSchedule) -> Vec<PrescriptionRow> {
    schedule
        .items
        .iter()
        .map(|rec| PrescriptionRow {
            patient: rec.metric.patient,
            protocol: rec.metric.protocol,
            ppf: rec.metric.ppf.value(),
            contrib: rec.metric.contrib.clone(),
            adherence: rec.metric.adherence.value(),
            dm_value: rec.metric.dm_value.value(),
            pe_value: rec.metric.pe_value.value(),
            usage: rec.metric.usage,
            days: rec.days.clone(),
            score: rec.score,
        })
        .collect()
}
