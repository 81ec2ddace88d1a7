//! Snapshot shape exchanged with persistence and remote sources.
//!
//! A snapshot maps attribute keys to partial value triples. Partial maps are
//! legal on load — a snapshot with fewer than five keys (or patches with
//! absent fields) only touches what it names. Totals never travel in a
//! snapshot; they are recomputed on the receiving side.

use std::collections::BTreeMap;

use attr_core::{AttributeKey, AttributeValues, AttributeValuesPatch};
use serde::{Deserialize, Serialize};

/// Per-key raw value triples, serialized under the five canonical
/// snake_case identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSnapshot {
    entries: BTreeMap<AttributeKey, AttributeValuesPatch>,
}

impl AttributeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a partial patch for `key`, replacing any previous patch.
    pub fn set(&mut self, key: AttributeKey, patch: AttributeValuesPatch) {
        self.entries.insert(key, patch);
    }

    /// Record all three fields of `values` for `key`.
    pub fn set_full(&mut self, key: AttributeKey, values: AttributeValues) {
        self.set(key, AttributeValuesPatch::from_values(values));
    }

    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValuesPatch> {
        self.entries.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValuesPatch)> {
        self.entries.iter().map(|(key, patch)| (*key, patch))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
