//! Static display catalog for the five attributes.
//!
//! Pure data: one immutable [`AttributeMeta`] record per key, defined once at
//! compile time and never mutated. Lookups are total functions — the key enum
//! is closed, so there is no invalid-key path and no teardown.

use crate::key::AttributeKey;

/// Immutable display metadata for one attribute.
///
/// Icon identifiers are asset references resolved by the display layer; the
/// canonical set is `attr_vitality` through `attr_luck`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tooltip: Option<&'static str>,
}

const VITALITY: AttributeMeta = AttributeMeta {
    name: "Vitality",
    description: "Health and physical endurance",
    icon: "attr_vitality",
    tooltip: Some("Raises maximum health and resistance to physical ailments"),
};

const STRENGTH: AttributeMeta = AttributeMeta {
    name: "Strength",
    description: "Physical power and melee damage",
    icon: "attr_strength",
    tooltip: Some("Raises melee damage and carrying capacity"),
};

const AGILITY: AttributeMeta = AttributeMeta {
    name: "Agility",
    description: "Speed, evasion, accuracy",
    icon: "attr_agility",
    tooltip: Some("Raises evasion and ranged accuracy"),
};

const INTELLECT: AttributeMeta = AttributeMeta {
    name: "Intellect",
    description: "Cognitive ability and magic aptitude",
    icon: "attr_intellect",
    tooltip: Some("Raises spell power and skill learning speed"),
};

const LUCK: AttributeMeta = AttributeMeta {
    name: "Luck",
    description: "Fortune, critical chance, rare findings",
    icon: "attr_luck",
    tooltip: None,
};

/// Returns the static metadata record for a key.
pub const fn meta(key: AttributeKey) -> &'static AttributeMeta {
    match key {
        AttributeKey::Vitality => &VITALITY,
        AttributeKey::Strength => &STRENGTH,
        AttributeKey::Agility => &AGILITY,
        AttributeKey::Intellect => &INTELLECT,
        AttributeKey::Luck => &LUCK,
    }
}

/// Returns the icon asset identifier for a key.
pub const fn icon(key: AttributeKey) -> &'static str {
    meta(key).icon
}
