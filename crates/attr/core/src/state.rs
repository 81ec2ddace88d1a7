//! Per-key state entries and the full five-attribute state.
//!
//! An [`AttributeEntry`] pairs one catalog record with one values record plus
//! the derived total. The total is recomputed by every constructor and never
//! patched independently, so it always equals `values.total()`.
//!
//! [`AttributesState`] is backed by a fixed array indexed by
//! [`AttributeKey::index`], so "exactly five entries, one per key" holds by
//! construction — partial state is unrepresentable.

use crate::catalog::{self, AttributeMeta};
use crate::key::AttributeKey;
use crate::values::{AttributeValues, AttributeValuesPatch};

/// One attribute's full display state: metadata, values, derived total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeEntry {
    pub key: AttributeKey,
    pub meta: &'static AttributeMeta,
    pub values: AttributeValues,
    /// Always `values.total()`; recomputed, never stored across an update.
    pub total: i32,
}

impl AttributeEntry {
    /// Build an entry for `key` from explicit values.
    pub const fn new(key: AttributeKey, values: AttributeValues) -> Self {
        Self {
            key,
            meta: catalog::meta(key),
            values,
            total: values.total(),
        }
    }

    /// Build an entry with the canonical default values.
    pub fn with_defaults(key: AttributeKey) -> Self {
        Self::new(key, AttributeValues::default())
    }

    /// Returns a new entry with the patch merged over this entry's values and
    /// the total recomputed. `self` is untouched; callers that hold a state
    /// copy are responsible for reassigning the key in it.
    #[must_use]
    pub fn updated(&self, patch: &AttributeValuesPatch) -> Self {
        Self::new(self.key, self.values.merged(patch))
    }
}

/// The complete attribute state: one entry per canonical key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributesState {
    entries: [AttributeEntry; AttributeKey::COUNT],
}

impl AttributesState {
    /// State with canonical default values for every key.
    pub fn new() -> Self {
        Self {
            entries: AttributeKey::ALL.map(AttributeEntry::with_defaults),
        }
    }

    /// State with per-key overrides merged over the defaults.
    ///
    /// Deterministic: the same overrides always produce the same state. Keys
    /// absent from `overrides` get the defaults; a key listed twice has its
    /// patches applied in slice order.
    pub fn with_overrides(overrides: &[(AttributeKey, AttributeValuesPatch)]) -> Self {
        let mut state = Self::new();
        for (key, patch) in overrides {
            state.set(state.get(*key).updated(patch));
        }
        state
    }

    /// The entry for `key`. Total function — every key has an entry.
    pub fn get(&self, key: AttributeKey) -> &AttributeEntry {
        &self.entries[key.index()]
    }

    /// Replace the entry for `entry.key`.
    pub fn set(&mut self, entry: AttributeEntry) {
        self.entries[entry.key.index()] = entry;
    }

    /// Pure single-key update: returns the merged entry without touching this
    /// state. Pair with [`set`](Self::set) to commit.
    #[must_use]
    pub fn updated(&self, key: AttributeKey, patch: &AttributeValuesPatch) -> AttributeEntry {
        self.get(key).updated(patch)
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeEntry> {
        self.entries.iter()
    }
}

impl Default for AttributesState {
    fn default() -> Self {
        Self::new()
    }
}
