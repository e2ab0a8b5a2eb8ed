use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use praxis_core::dimensions::DimensionRegistry;
use praxis_core::errors::ConfigError;
use praxis_core::ids::ProtocolId;
use praxis_core::unit::UnitValue;

/// How a dimension fed by several assessment scales combines their values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationRule {
    /// Contributions from all feeding scales add up.
    #[default]
    Sum,
    /// Contributions are averaged over the scales that actually supplied a
    /// value for this patient.
    Mean,
}

/// Fit of one protocol for one patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitScore {
    pub ppf: UnitValue,
    /// Per-dimension contribution, registry order, each in [0, 1].
    pub contrib: Vec<f64>,
}

/// Compiled protocol→dimension weight table plus the scale→dimension
/// mapping, with every name resolved to a registry index up front.
///
/// Immutable configuration, loaded once per run and shared read-only
/// across all patient pipelines.
#[derive(Debug, Clone)]
pub struct FitModel {
    registry: DimensionRegistry,
    rule: AggregationRule,
    /// Assessment scale → dimension indices it feeds. A scale mapped to k
    /// dimensions splits its value evenly across them.
    scale_map: BTreeMap<String, Vec<usize>>,
    /// Protocol → weight per dimension, registry order.
    protocol_weights: BTreeMap<ProtocolId, Vec<f64>>,
}

impl FitModel {
    pub fn new(registry: DimensionRegistry, rule: AggregationRule) -> Self {
        Self {
            registry,
            rule,
            scale_map: BTreeMap::new(),
            protocol_weights: BTreeMap::new(),
        }
    }

    pub fn dimensions(&self) -> &DimensionRegistry {
        &self.registry
    }

    /// Map an assessment scale onto the dimensions it feeds.
    pub fn map_scale<S: Into<String>>(
        &mut self,
        scale: S,
        dimensions: &[&str],
    ) -> Result<(), ConfigError> {
        let mut indices = Vec::with_capacity(dimensions.len());
        for name in dimensions {
            let index =
                self.registry
                    .resolve(name)
                    .ok_or_else(|| ConfigError::UnknownDimension {
                        name: (*name).to_string(),
                    })?;
            indices.push(index);
        }
        self.scale_map.insert(scale.into(), indices);
        Ok(())
    }

    /// Set a protocol's dimension weights. Unnamed dimensions stay 0.
    pub fn set_protocol(
        &mut self,
        protocol: ProtocolId,
        weights: &[(&str, f64)],
    ) -> Result<(), ConfigError> {
        let mut row = self.registry.zero_vector();
        for (name, weight) in weights {
            let index =
                self.registry
                    .resolve(name)
                    .ok_or_else(|| ConfigError::UnknownDimension {
                        name: (*name).to_string(),
                    })?;
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    component: "protocol_dimension",
                    value: *weight,
                });
            }
            row[index] = *weight;
        }
        self.protocol_weights.insert(protocol, row);
        Ok(())
    }

    /// All protocols known to the weight table, in id order. These are the
    /// candidates a scoring run considers for every patient.
    pub fn protocols(&self) -> impl Iterator<Item = ProtocolId> + '_ {
        self.protocol_weights.keys().copied()
    }

    /// Compute `ppf` and the contribution vector for one protocol.
    ///
    /// A protocol with no overlapping dimensions for this patient (or one
    /// absent from the weight table) yields an all-zero result — a valid,
    /// low-ranking outcome, not an error.
    pub fn evaluate(
        &self,
        protocol: ProtocolId,
        assessments: &HashMap<String, UnitValue>,
    ) -> FitScore {
        let dims = self.registry.len();
        let patient_values = self.patient_dimension_values(assessments);

        let mut contrib = vec![0.0; dims];
        if let Some(row) = self.protocol_weights.get(&protocol) {
            for d in 0..dims {
                contrib[d] = (row[d] * patient_values[d]).clamp(0.0, 1.0);
            }
        }
        let ppf = UnitValue::new(contrib.iter().sum());
        FitScore { ppf, contrib }
    }

    /// Fold the patient's assessment values into one value per dimension.
    fn patient_dimension_values(&self, assessments: &HashMap<String, UnitValue>) -> Vec<f64> {
        let dims = self.registry.len();
        let mut sums = vec![0.0; dims];
        let mut feeders = vec![0u32; dims];

        // BTreeMap order keeps the float accumulation byte-stable.
        for (scale, indices) in &self.scale_map {
            let Some(value) = assessments.get(scale) else {
                continue;
            };
            let share = value.value() / indices.len() as f64;
            for &d in indices {
                sums[d] += share;
                feeders[d] += 1;
            }
        }

        if self.rule == AggregationRule::Mean {
            for d in 0..dims {
                if feeders[d] > 1 {
                    sums[d] /= f64::from(feeders[d]);
                }
            }
        }
        sums
    }
}

/// Serializable form of the weight table, for TOML/JSON configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitModelSpec {
    /// Ordered clinical-dimension vocabulary.
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub aggregation: AggregationRule,
    /// Assessment scale → dimension names it feeds.
    #[serde(default)]
    pub scales: BTreeMap<String, Vec<String>>,
    /// One entry per protocol.
    #[serde(default)]
    pub protocols: Vec<ProtocolWeightsSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolWeightsSpec {
    pub protocol: ProtocolId,
    pub weights: BTreeMap<String, f64>,
}

impl FitModelSpec {
    /// Resolve all names against the dimension registry and produce the
    /// compiled model. Unknown names and negative weights are fatal.
    pub fn compile(&self) -> Result<FitModel, ConfigError> {
        let registry = DimensionRegistry::new(self.dimensions.iter().cloned());
        let mut model = FitModel::new(registry, self.aggregation);
        for (scale, dims) in &self.scales {
            let names: Vec<&str> = dims.iter().map(String::as_str).collect();
            model.map_scale(scale.clone(), &names)?;
        }
        for entry in &self.protocols {
            let weights: Vec<(&str, f64)> = entry
                .weights
                .iter()
                .map(|(name, w)| (name.as_str(), *w))
                .collect();
            model.set_protocol(entry.protocol, &weights)?;
        }
        Ok(model)
    }
}
