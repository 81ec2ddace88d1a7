//! Synchronous reactive manager over the attribute model.
//!
//! The manager owns one value triple per key plus a cached clamped total —
//! the "cells" — and a composed [`AttributePolicy`]. Writes are gated by the
//! policy, recompute the affected total inline, and notify the policy
//! synchronously when the observed total actually moves. There is no
//! scheduling and no cross-thread sharing: every call completes before it
//! returns, on the caller's thread.

use attr_core::{
    AttributeChangeEvent, AttributeKey, AttributeValues, CLAMP_MAX, CLAMP_MIN, clamp_value,
};

use crate::error::{ManagerError, Result};
use crate::policy::{AttributePolicy, ValueField};
use crate::snapshot::AttributeSnapshot;

/// Construction-time configuration for an [`AttributeManager`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Initial base values per key; keys not listed start at base 0.
    /// Equipment and effect bonuses always start at 0.
    pub initial_values: Vec<(AttributeKey, i32)>,
    /// When set, `persist_state` runs after every notified change.
    pub auto_persist: bool,
    /// Lower clamp bound for derived totals.
    pub min_value: i32,
    /// Upper clamp bound for derived totals.
    pub max_value: i32,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            initial_values: Vec::new(),
            auto_persist: false,
            min_value: CLAMP_MIN,
            max_value: CLAMP_MAX,
        }
    }
}

impl ManagerConfig {
    /// Config with the given initial base values and standard bounds.
    pub fn with_initial_values(
        initial_values: impl IntoIterator<Item = (AttributeKey, i32)>,
    ) -> Self {
        Self {
            initial_values: initial_values.into_iter().collect(),
            ..Self::default()
        }
    }
}

/// Owns the per-key cells and drives the policy hooks.
///
/// The derived total for a key is always
/// `clamp(base + equipment + effect, min_value, max_value)`; it is cached
/// only so change detection can compare against the previously observed
/// value, and is re-derived on every write.
pub struct AttributeManager<P: AttributePolicy> {
    values: [AttributeValues; AttributeKey::COUNT],
    totals: [i32; AttributeKey::COUNT],
    config: ManagerConfig,
    policy: P,
    disposed: bool,
}

impl<P: AttributePolicy> AttributeManager<P> {
    /// Build the cells from `config` and compose them with `policy`.
    ///
    /// Initial values bypass the validation gate — they are the trusted
    /// starting state, not a write.
    pub fn new(config: ManagerConfig, policy: P) -> Self {
        let mut values = [AttributeValues::zeroed(); AttributeKey::COUNT];
        for (key, base) in &config.initial_values {
            values[key.index()].base_value = *base;
        }

        let totals = core::array::from_fn(|i| {
            clamp_value(values[i].total(), config.min_value, config.max_value)
        });

        tracing::debug!(
            auto_persist = config.auto_persist,
            min = config.min_value,
            max = config.max_value,
            "attribute manager created"
        );

        Self {
            values,
            totals,
            config,
            policy,
            disposed: false,
        }
    }

    // ===== reads (stay available after destroy) =====

    /// Current clamped total for `key`.
    pub fn value(&self, key: AttributeKey) -> i32 {
        self.totals[key.index()]
    }

    /// Current raw triple for `key`.
    pub fn values(&self, key: AttributeKey) -> AttributeValues {
        self.values[key.index()]
    }

    /// Current base value for `key`.
    pub fn base(&self, key: AttributeKey) -> i32 {
        self.values[key.index()].base_value
    }

    /// Current equipment bonus for `key`.
    pub fn equipment(&self, key: AttributeKey) -> i32 {
        self.values[key.index()].equipment_bonus
    }

    /// Current effect bonus for `key`.
    pub fn effect(&self, key: AttributeKey) -> i32 {
        self.values[key.index()].effect_bonus
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    // ===== writes =====

    /// Set the base value for `key`.
    ///
    /// `Err(Disposed)` after [`destroy`](Self::destroy); `Ok(false)` when the
    /// policy rejects the write (cells untouched); `Ok(true)` when the write
    /// lands. A landed write that clamps to the same total does not notify.
    pub fn set_base(&mut self, key: AttributeKey, value: i32) -> Result<bool> {
        self.set_field(key, ValueField::Base, value)
    }

    /// Set the equipment bonus for `key`. Same contract as [`set_base`](Self::set_base).
    pub fn set_equipment(&mut self, key: AttributeKey, value: i32) -> Result<bool> {
        self.set_field(key, ValueField::Equipment, value)
    }

    /// Set the effect bonus for `key`. Same contract as [`set_base`](Self::set_base).
    pub fn set_effect(&mut self, key: AttributeKey, value: i32) -> Result<bool> {
        self.set_field(key, ValueField::Effect, value)
    }

    /// Adjust the base value by `delta` through the same validation path as
    /// [`set_base`](Self::set_base).
    pub fn modify(&mut self, key: AttributeKey, delta: i32) -> Result<bool> {
        let current = self.base(key);
        self.set_base(key, current + delta)
    }

    fn set_field(&mut self, key: AttributeKey, field: ValueField, value: i32) -> Result<bool> {
        if self.disposed {
            return Err(ManagerError::Disposed);
        }
        if !self.policy.validate(key, field, value) {
            tracing::trace!(%key, %field, value, "write rejected by policy");
            return Ok(false);
        }

        let idx = key.index();
        let old_values = self.values[idx];
        let mut new_values = old_values;
        match field {
            ValueField::Base => new_values.base_value = value,
            ValueField::Equipment => new_values.equipment_bonus = value,
            ValueField::Effect => new_values.effect_bonus = value,
        }

        let old_total = self.totals[idx];
        let new_total = clamp_value(
            new_values.total(),
            self.config.min_value,
            self.config.max_value,
        );

        self.values[idx] = new_values;
        if new_total == old_total {
            // Raw fields may have moved, but the observed value did not.
            return Ok(true);
        }
        self.totals[idx] = new_total;

        let event = AttributeChangeEvent {
            key,
            old_values,
            new_values,
            old_total,
            new_total,
        };
        self.policy.on_attribute_changed(&event);

        if self.config.auto_persist {
            let snapshot = self.snapshot();
            self.policy.persist_state(&snapshot);
        }

        Ok(true)
    }

    // ===== snapshot / restore =====

    /// Export the five raw triples. Totals are never exported; they are
    /// recomputed wherever the snapshot lands.
    pub fn export_data(&self) -> AttributeSnapshot {
        self.snapshot()
    }

    /// Apply a (possibly partial) snapshot through the normal setters.
    ///
    /// Each present sub-field goes through the same validation gate as a
    /// direct call; a rejected sub-field stays unchanged while the rest
    /// still apply. No atomicity across fields or keys.
    pub fn load_data(&mut self, snapshot: &AttributeSnapshot) -> Result<()> {
        for (key, patch) in snapshot.iter() {
            if let Some(base) = patch.base_value {
                self.set_base(key, base)?;
            }
            if let Some(equipment) = patch.equipment_bonus {
                self.set_equipment(key, equipment)?;
            }
            if let Some(effect) = patch.effect_bonus {
                self.set_effect(key, effect)?;
            }
        }
        Ok(())
    }

    /// Tear down the manager. Reads keep answering from the last observed
    /// cells; every later mutator returns [`ManagerError::Disposed`] and no
    /// further notifications fire.
    pub fn destroy(&mut self) {
        if !self.disposed {
            self.disposed = true;
            tracing::debug!("attribute manager destroyed");
        }
    }

    fn snapshot(&self) -> AttributeSnapshot {
        let mut snapshot = AttributeSnapshot::new();
        for key in AttributeKey::ALL {
            snapshot.set_full(key, self.values[key.index()]);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::OpenPolicy;

    /// Policy that records every change event and persist call.
    #[derive(Default)]
    struct RecordingPolicy {
        events: Vec<AttributeChangeEvent>,
        persists: usize,
    }

    impl AttributePolicy for RecordingPolicy {
        fn on_attribute_changed(&mut self, event: &AttributeChangeEvent) {
            self.events.push(*event);
        }

        fn persist_state(&mut self, _snapshot: &AttributeSnapshot) {
            self.persists += 1;
        }
    }

    /// Policy that rejects every write.
    struct RejectAll;

    impl AttributePolicy for RejectAll {
        fn validate(&self, _key: AttributeKey, _field: ValueField, _value: i32) -> bool {
            false
        }
    }

    fn bounded_config(min: i32, max: i32) -> ManagerConfig {
        ManagerConfig {
            initial_values: vec![(AttributeKey::Vitality, 10)],
            auto_persist: false,
            min_value: min,
            max_value: max,
        }
    }

    #[test]
    fn set_equipment_raises_total_and_notifies_once() {
        let mut manager = AttributeManager::new(bounded_config(0, 100), RecordingPolicy::default());
        assert_eq!(manager.value(AttributeKey::Vitality), 10);

        assert_eq!(manager.set_equipment(AttributeKey::Vitality, 5), Ok(true));
        assert_eq!(manager.value(AttributeKey::Vitality), 15);

        let events = &manager.policy().events;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].key, AttributeKey::Vitality);
        assert_eq!(events[0].old_total, 10);
        assert_eq!(events[0].new_total, 15);
    }

    #[test]
    fn rejected_write_leaves_cells_untouched() {
        let mut manager = AttributeManager::new(ManagerConfig::default(), RejectAll);
        let before = manager.values(AttributeKey::Strength);

        assert_eq!(manager.set_base(AttributeKey::Strength, 50), Ok(false));
        assert_eq!(manager.values(AttributeKey::Strength), before);
        assert_eq!(manager.value(AttributeKey::Strength), 0);
    }

    #[test]
    fn clamped_to_same_total_does_not_notify() {
        // max 100; base already saturates the clamp
        let mut manager = AttributeManager::new(
            ManagerConfig {
                initial_values: vec![(AttributeKey::Luck, 150)],
                ..bounded_config(0, 100)
            },
            RecordingPolicy::default(),
        );
        assert_eq!(manager.value(AttributeKey::Luck), 100);

        // 150 -> 140 still clamps to 100: raw field moves, total does not
        assert_eq!(manager.set_base(AttributeKey::Luck, 140), Ok(true));
        assert_eq!(manager.base(AttributeKey::Luck), 140);
        assert_eq!(manager.value(AttributeKey::Luck), 100);
        assert!(manager.policy().events.is_empty());
    }

    #[test]
    fn modify_goes_through_set_base() {
        let mut manager = AttributeManager::new(bounded_config(0, 100), RecordingPolicy::default());

        assert_eq!(manager.modify(AttributeKey::Vitality, 3), Ok(true));
        assert_eq!(manager.base(AttributeKey::Vitality), 13);
        assert_eq!(manager.value(AttributeKey::Vitality), 13);

        assert_eq!(manager.modify(AttributeKey::Vitality, -20), Ok(true));
        assert_eq!(manager.base(AttributeKey::Vitality), -7);
        // total clamped at the floor
        assert_eq!(manager.value(AttributeKey::Vitality), 0);
    }

    #[test]
    fn auto_persist_runs_after_each_change() {
        let mut manager = AttributeManager::new(
            ManagerConfig {
                auto_persist: true,
                ..bounded_config(0, 100)
            },
            RecordingPolicy::default(),
        );

        manager.set_equipment(AttributeKey::Vitality, 5).unwrap();
        manager.set_effect(AttributeKey::Vitality, 2).unwrap();
        // same value again: no change, no persist
        manager.set_effect(AttributeKey::Vitality, 2).unwrap();

        assert_eq!(manager.policy().persists, 2);
    }

    #[test]
    fn export_then_load_is_identity() {
        let mut manager = AttributeManager::new(
            ManagerConfig::with_initial_values([
                (AttributeKey::Vitality, 12),
                (AttributeKey::Strength, 8),
            ]),
            OpenPolicy,
        );
        manager.set_equipment(AttributeKey::Strength, 4).unwrap();
        manager.set_effect(AttributeKey::Luck, 3).unwrap();

        let exported = manager.export_data();
        let before: Vec<_> = AttributeKey::ALL.map(|k| manager.values(k)).into();

        manager.load_data(&exported).unwrap();
        let after: Vec<_> = AttributeKey::ALL.map(|k| manager.values(k)).into();
        assert_eq!(before, after);
        assert_eq!(manager.export_data(), exported);
    }

    /// Policy that rejects base writes above a fixed cap; bonuses are ungated.
    struct CappedBase(i32);

    impl AttributePolicy for CappedBase {
        fn validate(&self, _key: AttributeKey, field: ValueField, value: i32) -> bool {
            match field {
                ValueField::Base => value <= self.0,
                ValueField::Equipment | ValueField::Effect => true,
            }
        }
    }

    #[test]
    fn load_rejected_sub_field_leaves_siblings_applied() {
        let mut manager = AttributeManager::new(
            ManagerConfig::with_initial_values([(AttributeKey::Strength, 8)]),
            CappedBase(20),
        );

        let mut snapshot = AttributeSnapshot::new();
        snapshot.set_full(AttributeKey::Strength, AttributeValues::new(50, 4, 2));
        snapshot.set(
            AttributeKey::Luck,
            attr_core::AttributeValuesPatch::base(6),
        );
        manager.load_data(&snapshot).unwrap();

        // base 50 exceeds the cap and is rejected; the other two fields of
        // the same key still land, as does the other key
        assert_eq!(manager.base(AttributeKey::Strength), 8);
        assert_eq!(manager.equipment(AttributeKey::Strength), 4);
        assert_eq!(manager.effect(AttributeKey::Strength), 2);
        assert_eq!(manager.value(AttributeKey::Strength), 14);
        assert_eq!(manager.base(AttributeKey::Luck), 6);
    }

    #[test]
    fn load_applies_partial_snapshots_per_field() {
        let mut manager = AttributeManager::new(ManagerConfig::default(), OpenPolicy);

        let mut snapshot = AttributeSnapshot::new();
        snapshot.set(
            AttributeKey::Agility,
            attr_core::AttributeValuesPatch::base(14),
        );
        manager.load_data(&snapshot).unwrap();

        assert_eq!(manager.base(AttributeKey::Agility), 14);
        // unnamed fields and keys untouched
        assert_eq!(manager.equipment(AttributeKey::Agility), 0);
        assert_eq!(manager.base(AttributeKey::Strength), 0);
    }

    #[test]
    fn destroyed_manager_fails_mutators_but_still_reads() {
        let mut manager = AttributeManager::new(bounded_config(0, 100), RecordingPolicy::default());
        manager.set_equipment(AttributeKey::Vitality, 5).unwrap();
        manager.destroy();

        assert!(manager.is_disposed());
        assert_eq!(
            manager.set_base(AttributeKey::Vitality, 99),
            Err(ManagerError::Disposed)
        );
        assert_eq!(
            manager.modify(AttributeKey::Vitality, 1),
            Err(ManagerError::Disposed)
        );
        let exported = manager.export_data();
        assert_eq!(manager.load_data(&exported), Err(ManagerError::Disposed));

        // last observed state still readable, and no late notifications fired
        assert_eq!(manager.value(AttributeKey::Vitality), 15);
        assert_eq!(manager.policy().events.len(), 1);
    }
}
