//! Change-notification payloads.

use crate::key::AttributeKey;
use crate::values::AttributeValues;

/// Before/after snapshot of one attribute across a write.
///
/// Carried to observers when a write lands; the payload itself enforces
/// nothing. `old_total`/`new_total` are the clamped effective values as the
/// observer saw them, which is why they travel alongside the raw triples
/// instead of being recomputed from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeChangeEvent {
    pub key: AttributeKey,
    pub old_values: AttributeValues,
    pub new_values: AttributeValues,
    pub old_total: i32,
    pub new_total: i32,
}

impl AttributeChangeEvent {
    /// True if the observable total actually moved.
    pub const fn changed(&self) -> bool {
        self.old_total != self.new_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_reflects_total_delta() {
        let event = AttributeChangeEvent {
            key: AttributeKey::Vitality,
            old_values: AttributeValues::new(10, 0, 0),
            new_values: AttributeValues::new(10, 5, 0),
            old_total: 10,
            new_total: 15,
        };
        assert!(event.changed());

        let unchanged = AttributeChangeEvent {
            new_total: 10,
            ..event
        };
        assert!(!unchanged.changed());
    }
}
