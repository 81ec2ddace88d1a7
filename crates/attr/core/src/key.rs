//! Canonical attribute identifiers.
//!
//! The key set is closed: exactly five attributes exist and no other value is
//! ever valid. Inside the crate this is enforced by the type system — lookups
//! take [`AttributeKey`] directly, so an invalid key is unrepresentable. The
//! only runtime surface is string parsing at system boundaries (save files,
//! network messages), which goes through [`FromStr`] or [`is_valid_key`] and
//! rejects rather than panics.

use core::str::FromStr;

use crate::error::AttributeError;

/// The five character attributes.
///
/// The snake_case serialized names (`vitality`, `strength`, `agility`,
/// `intellect`, `luck`) are the wire-level identifiers and must stay stable
/// for compatibility with existing save data.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeKey {
    /// Health and physical endurance
    Vitality,
    /// Physical power and melee damage
    Strength,
    /// Speed, evasion, accuracy
    Agility,
    /// Cognitive ability and magic aptitude
    Intellect,
    /// Fortune, critical chance, rare findings
    Luck,
}

impl AttributeKey {
    /// Number of attribute keys. The state container and the manager size
    /// their storage with this.
    pub const COUNT: usize = 5;

    /// All keys in canonical order.
    ///
    /// This is the iteration order used when building full state; the
    /// resulting mapping is keyed, not sequenced, so consumers must not
    /// attach meaning to the order beyond determinism.
    pub const ALL: [AttributeKey; Self::COUNT] = [
        AttributeKey::Vitality,
        AttributeKey::Strength,
        AttributeKey::Agility,
        AttributeKey::Intellect,
        AttributeKey::Luck,
    ];

    /// Stable dense index for array-backed storage.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parses a boundary string into a key, surfacing the crate error type.
    pub fn parse(candidate: &str) -> Result<Self, AttributeError> {
        Self::from_str(candidate).map_err(|_| AttributeError::UnknownKey {
            key: candidate.into(),
        })
    }
}

/// Membership test against the five canonical keys.
///
/// Boundary-facing guard for untrusted input: returns a boolean instead of
/// failing, so callers can narrow before touching the typed API.
pub fn is_valid_key(candidate: &str) -> bool {
    AttributeKey::from_str(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_canonical_keys_are_valid() {
        for key in ["vitality", "strength", "agility", "intellect", "luck"] {
            assert!(is_valid_key(key), "{key} should be valid");
        }
    }

    #[test]
    fn unknown_strings_are_rejected() {
        for key in ["", "charisma", "vit", "Vitality ", "luck!"] {
            assert!(!is_valid_key(key), "{key:?} should be invalid");
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(AttributeKey::parse("VITALITY").unwrap(), AttributeKey::Vitality);
        assert_eq!(AttributeKey::parse("Luck").unwrap(), AttributeKey::Luck);
    }

    #[test]
    fn parse_surfaces_unknown_key_error() {
        let err = AttributeKey::parse("charisma").unwrap_err();
        assert_eq!(err.to_string(), "unknown attribute key: charisma");
    }

    #[test]
    fn display_matches_wire_identifiers() {
        assert_eq!(AttributeKey::Vitality.to_string(), "vitality");
        assert_eq!(AttributeKey::Intellect.as_ref(), "intellect");
    }

    #[test]
    fn indices_are_dense_and_ordered() {
        for (expected, key) in AttributeKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), expected);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_wire_identifiers() {
        assert_eq!(
            serde_json::to_string(&AttributeKey::Vitality).unwrap(),
            "\"vitality\""
        );
        let key: AttributeKey = serde_json::from_str("\"luck\"").unwrap();
        assert_eq!(key, AttributeKey::Luck);
    }
}
