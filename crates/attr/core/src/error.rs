//! Error types for the attribute data model.
//!
//! The model is total by construction: lookups and arithmetic take the closed
//! [`AttributeKey`](crate::AttributeKey) enum and cannot fail. The single
//! fallible surface is parsing a key from an untrusted string at a system
//! boundary.

/// Errors produced by the attribute data model.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeError {
    /// A boundary string did not name one of the five canonical keys.
    #[error("unknown attribute key: {key}")]
    UnknownKey { key: String },
}
