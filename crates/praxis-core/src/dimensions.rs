use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed clinical-dimension vocabulary for one scoring run.
///
/// Dimension names are resolved to indices once, at configuration load;
/// contribution vectors are plain `Vec<f64>` indexed by this registry, so
/// the scoring arithmetic never touches string keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DimensionRegistry {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl From<Vec<String>> for DimensionRegistry {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<DimensionRegistry> for Vec<String> {
    fn from(registry: DimensionRegistry) -> Self {
        registry.names
    }
}

impl DimensionRegistry {
    /// Build a registry from an ordered list of dimension names.
    /// Duplicate names keep their first index.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self {
            names: Vec::new(),
            index: HashMap::new(),
        };
        for name in names {
            let name = name.into();
            if !registry.index.contains_key(&name) {
                registry.index.insert(name.clone(), registry.names.len());
                registry.names.push(name);
            }
        }
        registry
    }

    /// Resolve a dimension name to its index.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name at a given index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Ordered dimension names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// A zero contribution vector of the right length.
    pub fn zero_vector(&self) -> Vec<f64> {
        vec![0.0; self.names.len()]
    }
}
