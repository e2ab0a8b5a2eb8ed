use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, info};

use praxis_core::config::EngineConfig;
use praxis_core::errors::PraxisResult;
use praxis_core::ids::ProtocolId;
use praxis_core::models::{
    PatientData, PatientProtocolMetric, PatientSchedule, ScoredRecommendation,
};
use praxis_core::similarity::SimilarityMatrix;
use praxis_core::unit::UnitValue;
use praxis_features::{FeatureAggregator, ProtocolFeatures};
use praxis_ranking::RecommendationSelector;
use praxis_schedule::WeekScheduler;
use praxis_scoring::{CompositeScorer, FitModel};

/// The main engine. Holds the immutable per-run configuration — weight
/// table, similarity matrix, scoring weights — and runs the full pipeline
/// for one patient at a time.
///
/// Candidates for every patient are the protocols known to the fit model's
/// weight table; a protocol the patient never attempted scores on fit
/// alone.
pub struct PrescriptionEngine {
    fit: FitModel,
    similarity: SimilarityMatrix,
    aggregator: FeatureAggregator,
    scorer: CompositeScorer,
    selector: RecommendationSelector,
    scheduler: WeekScheduler,
}

impl PrescriptionEngine {
    /// Validate the configuration and build the engine. A bad
    /// configuration rejects the whole run here, before any patient is
    /// scored.
    pub fn new(
        config: EngineConfig,
        fit: FitModel,
        similarity: SimilarityMatrix,
    ) -> PraxisResult<Self> {
        config.validate()?;
        Ok(Self {
            fit,
            similarity,
            aggregator: FeatureAggregator::new(config.alpha),
            scorer: CompositeScorer::new(config.weights),
            selector: RecommendationSelector::new(config.top_k, config.diversify),
            scheduler: WeekScheduler::new(config.frequency.clone(), config.balance_tolerance),
        })
    }

    /// Score and rank one patient's protocol candidates.
    ///
    /// Returns the post-selection recommendation list (days unassigned).
    /// A patient with no recommendable protocols yields an empty list.
    pub fn score_patient(&self, data: &PatientData) -> PraxisResult<Vec<ScoredRecommendation>> {
        // Stage 1: behavioral features from raw streams.
        let features = self.aggregator.aggregate(&data.sessions, &data.timeseries);
        let by_protocol: HashMap<ProtocolId, &ProtocolFeatures> =
            features.iter().map(|f| (f.protocol, f)).collect();
        debug!(
            patient = %data.patient,
            protocols_with_history = features.len(),
            "aggregated features"
        );

        // Stages 2–3: fit + composite score per candidate protocol.
        let mut candidates = Vec::new();
        for protocol in self.fit.protocols() {
            let fit = self.fit.evaluate(protocol, &data.assessments);
            let history = by_protocol.get(&protocol);
            let metric = PatientProtocolMetric {
                patient: data.patient,
                protocol,
                ppf: fit.ppf,
                contrib: fit.contrib,
                adherence: history.map_or(UnitValue::ZERO, |f| f.adherence),
                dm_value: history.map_or(UnitValue::ZERO, |f| f.dm_value),
                pe_value: history.map_or(UnitValue::ZERO, |f| f.pe_value),
                usage: history.map_or(0, |f| f.usage),
            };
            let score = self.scorer.score(&metric);
            candidates.push(ScoredRecommendation::new(metric, score));
        }

        // Stage 4: rank, diversify, truncate.
        let selected = self.selector.select(candidates, &self.similarity);
        info!(
            patient = %data.patient,
            selected = selected.len(),
            "scored patient"
        );
        Ok(selected)
    }

    /// Full pipeline for one patient: score, select, and assign weekdays.
    pub fn schedule_patient(&self, data: &PatientData) -> PraxisResult<PatientSchedule> {
        let selected = self.score_patient(data)?;

        // Stage 5: weekly day assignment under the balance contract.
        let (items, report) = self.scheduler.schedule(selected)?;
        debug!(
            patient = %data.patient,
            total_slots = report.total_slots,
            spread = report.spread,
            "scheduled patient"
        );
        Ok(PatientSchedule {
            patient: data.patient,
            items,
            report,
        })
    }

    /// Schedule many patients in parallel. Patients are independent, so
    /// this is a plain data-parallel sweep; results come back in input
    /// order.
    pub fn schedule_patients(&self, patients: &[PatientData]) -> Vec<PraxisResult<PatientSchedule>> {
        patients
            .par_iter()
            .map(|data| self.schedule_patient(data))
            .collect()
    }
}
