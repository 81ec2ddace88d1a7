//! Attribute value triples and range clamping.
//!
//! An attribute's effective value is the sum of three contributions: the
//! stored base value, an additive equipment bonus, and an additive effect
//! bonus from temporary buffs or debuffs. The triple itself enforces no
//! bounds — only [`clamp_value`] does, at the point a caller asks for a
//! bounded result.

/// Conventional lower bound for attribute values.
pub const CLAMP_MIN: i32 = 0;

/// Conventional upper bound for attribute values.
pub const CLAMP_MAX: i32 = 999;

/// The three additive contributions to one attribute.
///
/// Plain data owned by whoever holds it. Construction does not validate
/// ranges; game stats are expected to stay within ordinary magnitudes
/// (tens to low thousands).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeValues {
    pub base_value: i32,
    pub equipment_bonus: i32,
    pub effect_bonus: i32,
}

impl AttributeValues {
    /// Create values with explicit fields.
    pub const fn new(base_value: i32, equipment_bonus: i32, effect_bonus: i32) -> Self {
        Self {
            base_value,
            equipment_bonus,
            effect_bonus,
        }
    }

    /// All-zero values, for callers that build up from nothing.
    pub const fn zeroed() -> Self {
        Self::new(0, 0, 0)
    }

    /// Effective value: base + equipment + effect. Unclamped.
    pub const fn total(&self) -> i32 {
        self.base_value + self.equipment_bonus + self.effect_bonus
    }

    /// Returns a new record with the patch's present fields replacing this
    /// record's fields. `self` is untouched.
    #[must_use]
    pub fn merged(&self, patch: &AttributeValuesPatch) -> Self {
        Self {
            base_value: patch.base_value.unwrap_or(self.base_value),
            equipment_bonus: patch.equipment_bonus.unwrap_or(self.equipment_bonus),
            effect_bonus: patch.effect_bonus.unwrap_or(self.effect_bonus),
        }
    }
}

impl Default for AttributeValues {
    /// Canonical starting values: base 10, equipment 2, effect 2.
    fn default() -> Self {
        Self::new(10, 2, 2)
    }
}

/// Minimal partial update to an [`AttributeValues`] record.
///
/// Absent fields leave the existing value in place; present fields win.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeValuesPatch {
    pub base_value: Option<i32>,
    pub equipment_bonus: Option<i32>,
    pub effect_bonus: Option<i32>,
}

impl AttributeValuesPatch {
    /// Patch setting only the base value.
    pub const fn base(value: i32) -> Self {
        Self {
            base_value: Some(value),
            equipment_bonus: None,
            effect_bonus: None,
        }
    }

    /// Patch setting only the equipment bonus.
    pub const fn equipment(value: i32) -> Self {
        Self {
            base_value: None,
            equipment_bonus: Some(value),
            effect_bonus: None,
        }
    }

    /// Patch setting only the effect bonus.
    pub const fn effect(value: i32) -> Self {
        Self {
            base_value: None,
            equipment_bonus: None,
            effect_bonus: Some(value),
        }
    }

    /// Patch carrying all three fields of an existing record.
    pub const fn from_values(values: AttributeValues) -> Self {
        Self {
            base_value: Some(values.base_value),
            equipment_bonus: Some(values.equipment_bonus),
            effect_bonus: Some(values.effect_bonus),
        }
    }

    /// True if no field is present.
    pub const fn is_empty(&self) -> bool {
        self.base_value.is_none() && self.equipment_bonus.is_none() && self.effect_bonus.is_none()
    }
}

/// Two-sided clamp of `value` into `[min, max]`.
///
/// When `min > max` the bounds are contradictory and the function returns
/// `min`. Idempotent: clamping an already-clamped value is a no-op.
pub const fn clamp_value(value: i32, min: i32, max: i32) -> i32 {
    if min > max {
        return min;
    }
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp into the conventional `[0, 999]` attribute range.
pub const fn clamp_standard(value: i32) -> i32 {
    clamp_value(value, CLAMP_MIN, CLAMP_MAX)
}
