use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use praxis_core::ids::ProtocolId;
use praxis_core::models::{SessionRecord, TimeseriesSample};
use praxis_core::unit::UnitValue;

use crate::ewma::Ewma;

/// Smoothed behavioral signals for one protocol of one patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolFeatures {
    pub protocol: ProtocolId,
    /// EWMA over session-level adherence ratios.
    pub adherence: UnitValue,
    /// Count of distinct qualifying sessions in the observation window.
    pub usage: u32,
    /// EWMA over per-session mean difficulty-match samples.
    pub dm_value: UnitValue,
    /// EWMA over per-session mean experience-match samples.
    pub pe_value: UnitValue,
}

/// Derives per-protocol features from one patient's raw streams.
///
/// Inputs must be chronologically ordered per protocol — no reordering is
/// performed. Samples that are non-finite, outside [0, 1], or whose
/// timestamp regresses within a protocol's stream are dropped with a
/// warning. A protocol with no valid data is simply absent from the
/// output and treated as unattempted downstream.
#[derive(Debug, Clone)]
pub struct FeatureAggregator {
    alpha: f64,
}

impl FeatureAggregator {
    /// `alpha` is the EWMA smoothing factor, validated by the engine config.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    pub fn aggregate(
        &self,
        sessions: &[SessionRecord],
        timeseries: &[TimeseriesSample],
    ) -> Vec<ProtocolFeatures> {
        let session_signals = self.fold_sessions(sessions);
        let match_signals = self.fold_timeseries(timeseries);

        // Union of protocols from both streams, in protocol-id order.
        let mut protocols: BTreeMap<ProtocolId, ProtocolFeatures> = BTreeMap::new();
        for (protocol, (adherence, usage)) in session_signals {
            protocols.insert(
                protocol,
                ProtocolFeatures {
                    protocol,
                    adherence,
                    usage,
                    dm_value: UnitValue::ZERO,
                    pe_value: UnitValue::ZERO,
                },
            );
        }
        for (protocol, (dm_value, pe_value)) in match_signals {
            let features = protocols.entry(protocol).or_insert_with(|| ProtocolFeatures {
                protocol,
                adherence: UnitValue::ZERO,
                usage: 0,
                dm_value: UnitValue::ZERO,
                pe_value: UnitValue::ZERO,
            });
            features.dm_value = dm_value;
            features.pe_value = pe_value;
        }

        protocols.into_values().collect()
    }

    /// Adherence EWMA + distinct-session usage count per protocol.
    fn fold_sessions(
        &self,
        sessions: &[SessionRecord],
    ) -> BTreeMap<ProtocolId, (UnitValue, u32)> {
        struct Acc {
            ewma: Ewma,
            seen_sessions: HashSet<i64>,
            last_ts: Option<DateTime<Utc>>,
        }

        let mut accs: BTreeMap<ProtocolId, Acc> = BTreeMap::new();
        for record in sessions {
            if !record.adherence.is_finite() || !(0.0..=1.0).contains(&record.adherence) {
                warn!(
                    patient = %record.patient,
                    protocol = %record.protocol,
                    session = record.session_id,
                    adherence = record.adherence,
                    "dropping session record with out-of-range adherence"
                );
                continue;
            }
            let acc = accs.entry(record.protocol).or_insert_with(|| Acc {
                ewma: Ewma::new(self.alpha),
                seen_sessions: HashSet::new(),
                last_ts: None,
            });
            if acc.last_ts.is_some_and(|last| record.timestamp < last) {
                warn!(
                    patient = %record.patient,
                    protocol = %record.protocol,
                    session = record.session_id,
                    "dropping session record with regressing timestamp"
                );
                continue;
            }
            acc.last_ts = Some(record.timestamp);
            acc.seen_sessions.insert(record.session_id);
            acc.ewma.update(record.adherence);
        }

        accs.into_iter()
            .map(|(protocol, acc)| {
                let adherence = UnitValue::new(acc.ewma.value().unwrap_or(0.0));
                (protocol, (adherence, acc.seen_sessions.len() as u32))
            })
            .collect()
    }

    /// Per-session means of dm/pe samples, then an EWMA over the session
    /// series, per protocol.
    fn fold_timeseries(
        &self,
        timeseries: &[TimeseriesSample],
    ) -> BTreeMap<ProtocolId, (UnitValue, UnitValue)> {
        struct SessionMean {
            dm_sum: f64,
            pe_sum: f64,
            samples: u32,
        }
        struct Acc {
            // Session order of first appearance; the stream is chronological.
            order: Vec<i64>,
            means: HashMap<i64, SessionMean>,
            last_ts: Option<DateTime<Utc>>,
        }

        let mut accs: BTreeMap<ProtocolId, Acc> = BTreeMap::new();
        for sample in timeseries {
            let in_range = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
            if !in_range(sample.dm_value) || !in_range(sample.pe_value) {
                warn!(
                    patient = %sample.patient,
                    protocol = %sample.protocol,
                    session = sample.session_id,
                    dm = sample.dm_value,
                    pe = sample.pe_value,
                    "dropping timeseries sample with out-of-range values"
                );
                continue;
            }
            let acc = accs.entry(sample.protocol).or_insert_with(|| Acc {
                order: Vec::new(),
                means: HashMap::new(),
                last_ts: None,
            });
            if acc.last_ts.is_some_and(|last| sample.timestamp < last) {
                warn!(
                    patient = %sample.patient,
                    protocol = %sample.protocol,
                    session = sample.session_id,
                    "dropping timeseries sample with regressing timestamp"
                );
                continue;
            }
            acc.last_ts = Some(sample.timestamp);
            if !acc.means.contains_key(&sample.session_id) {
                acc.order.push(sample.session_id);
                acc.means.insert(
                    sample.session_id,
                    SessionMean {
                        dm_sum: 0.0,
                        pe_sum: 0.0,
                        samples: 0,
                    },
                );
            }
            if let Some(mean) = acc.means.get_mut(&sample.session_id) {
                mean.dm_sum += sample.dm_value;
                mean.pe_sum += sample.pe_value;
                mean.samples += 1;
            }
        }

        accs.into_iter()
            .map(|(protocol, acc)| {
                let mut dm = Ewma::new(self.alpha);
                let mut pe = Ewma::new(self.alpha);
                for session_id in &acc.order {
                    if let Some(mean) = acc.means.get(session_id) {
                        let n = f64::from(mean.samples);
                        dm.update(mean.dm_sum / n);
                        pe.update(mean.pe_sum / n);
                    }
                }
                (
                    protocol,
                    (
                        UnitValue::new(dm.value().unwrap_or(0.0)),
                        UnitValue::new(pe.value().unwrap_or(0.0)),
                    ),
                )
            })
            .collect()
    }
}
