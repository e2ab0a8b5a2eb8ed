use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::ProtocolId;
use crate::unit::UnitValue;

/// One protocol-pair similarity observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimilarityEntry {
    pub a: ProtocolId,
    pub b: ProtocolId,
    pub value: UnitValue,
}

/// Symmetric protocol-to-protocol similarity table.
///
/// Entries are stored under the canonical `(min, max)` key, so symmetry
/// holds by construction. The diagonal is implicitly 1; missing pairs are 0.
/// Read-only once built — no writer exists after configuration load.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    entries: HashMap<(ProtocolId, ProtocolId), UnitValue>,
}

impl SimilarityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from pair entries. Later duplicates overwrite earlier
    /// ones; diagonal entries are ignored (the diagonal is always 1).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SimilarityEntry>,
    {
        let mut matrix = Self::new();
        for entry in entries {
            matrix.insert(entry.a, entry.b, entry.value);
        }
        matrix
    }

    pub fn insert(&mut self, a: ProtocolId, b: ProtocolId, value: UnitValue) {
        if a == b {
            return;
        }
        self.entries.insert(Self::key(a, b), value);
    }

    /// Similarity between two protocols.
    pub fn get(&self, a: ProtocolId, b: ProtocolId) -> UnitValue {
        if a == b {
            return UnitValue::ONE;
        }
        self.entries
            .get(&Self::key(a, b))
            .copied()
            .unwrap_or(UnitValue::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(a: ProtocolId, b: ProtocolId) -> (ProtocolId, ProtocolId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
