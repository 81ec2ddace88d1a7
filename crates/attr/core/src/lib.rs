//! Deterministic character-attribute data model shared across clients.
//!
//! `attr-core` defines the canonical attribute set (the five keys), the
//! per-key value triples, the static display catalog, and the pure helpers
//! that build and update full attribute state. Everything here is plain data
//! plus total functions — no I/O, no logging, no shared mutable state. The
//! reactive layer in `attr-runtime` builds on the types re-exported here.
pub mod bonus;
pub mod catalog;
pub mod error;
pub mod event;
pub mod key;
pub mod state;
pub mod values;

pub use bonus::{AttributeBonus, AttributeConfig, BonusSource};
pub use catalog::{AttributeMeta, icon, meta};
pub use error::AttributeError;
pub use event::AttributeChangeEvent;
pub use key::{AttributeKey, is_valid_key};
pub use state::{AttributeEntry, AttributesState};
pub use values::{
    AttributeValues, AttributeValuesPatch, CLAMP_MAX, CLAMP_MIN, clamp_standard, clamp_value,
};
