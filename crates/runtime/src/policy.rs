//! Policy seam for validation, change notification, and persistence.
//!
//! The manager owns the value cells; everything game-specific — whether a
//! write is allowed, what happens when a total moves, where snapshots go —
//! lives behind [`AttributePolicy`]. A concrete manager composes the two
//! rather than inheriting plumbing.

use attr_core::{AttributeChangeEvent, AttributeKey};

use crate::snapshot::AttributeSnapshot;

/// Which field of the value triple a write targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ValueField {
    Base,
    Equipment,
    Effect,
}

/// Capability interface supplied by the embedding game.
///
/// All methods have permissive defaults, so a policy only overrides the
/// hooks it cares about (level-gated maxima, HUD refresh, save triggers).
pub trait AttributePolicy {
    /// Write gate, consulted before any cell changes. Returning `false`
    /// rejects the write: no partial update, the setter reports `Ok(false)`.
    fn validate(&self, _key: AttributeKey, _field: ValueField, _value: i32) -> bool {
        true
    }

    /// Fired exactly once per actual clamped-total change — a write whose
    /// total clamps to the previous value does not notify.
    fn on_attribute_changed(&mut self, _event: &AttributeChangeEvent) {}

    /// Fired after each notified change when the manager was configured with
    /// `auto_persist`. The snapshot carries the raw triples, not totals.
    fn persist_state(&mut self, _snapshot: &AttributeSnapshot) {}
}

/// Allow-everything, observe-nothing policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenPolicy;

impl AttributePolicy for OpenPolicy {}
