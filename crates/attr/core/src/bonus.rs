//! Bonus sources and per-attribute configuration.
//!
//! A [`AttributeBonus`] tags a flat value with the source it came from so it
//! can be routed into the matching field of an [`AttributeValues`] record.
//! Effect bonuses may carry a duration in turns; expiry bookkeeping belongs
//! to the game loop, not this crate.

use crate::values::{AttributeValues, clamp_value};

/// Where a bonus contribution comes from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BonusSource {
    /// Additive modifier from worn or held items.
    Equipment,
    /// Additive modifier from temporary effects (buffs/debuffs).
    Effect,
}

/// A single flat bonus with its source and optional lifetime.
///
/// Bonuses are immutable value objects; applying one produces a new values
/// record rather than mutating in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeBonus {
    pub source: BonusSource,
    pub value: i32,
    /// Remaining duration in turns; `None` means indefinite.
    pub duration: Option<u32>,
}

impl AttributeBonus {
    /// Indefinite equipment bonus.
    pub const fn equipment(value: i32) -> Self {
        Self {
            source: BonusSource::Equipment,
            value,
            duration: None,
        }
    }

    /// Indefinite effect bonus.
    pub const fn effect(value: i32) -> Self {
        Self {
            source: BonusSource::Effect,
            value,
            duration: None,
        }
    }

    /// Effect bonus that expires after `turns` turns.
    pub const fn effect_for(value: i32, turns: u32) -> Self {
        Self {
            source: BonusSource::Effect,
            value,
            duration: Some(turns),
        }
    }
}

impl AttributeValues {
    /// Returns a new record with the bonus added to the field matching its
    /// source. `self` is untouched.
    #[must_use]
    pub fn apply_bonus(&self, bonus: &AttributeBonus) -> Self {
        match bonus.source {
            BonusSource::Equipment => Self {
                equipment_bonus: self.equipment_bonus + bonus.value,
                ..*self
            },
            BonusSource::Effect => Self {
                effect_bonus: self.effect_bonus + bonus.value,
                ..*self
            },
        }
    }
}

/// Bounds and default for one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeConfig {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl AttributeConfig {
    /// Conventional attribute range with the canonical base default.
    pub const STANDARD: AttributeConfig = AttributeConfig {
        min: crate::values::CLAMP_MIN,
        max: crate::values::CLAMP_MAX,
        default: 10,
    };

    pub const fn new(min: i32, max: i32, default: i32) -> Self {
        Self { min, max, default }
    }

    /// Clamp a value into this configuration's range.
    pub const fn clamp(&self, value: i32) -> i32 {
        clamp_value(value, self.min, self.max)
    }
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
