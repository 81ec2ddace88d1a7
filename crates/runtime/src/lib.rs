//! Reactive attribute manager for game clients.
//!
//! This crate wraps the pure model from `attr-core` in a synchronous manager
//! that owns per-key value cells, derives clamped totals, and drives a
//! caller-supplied policy for validation, change notification, and
//! persistence. Consumers embed [`AttributeManager`] behind their UI or
//! server sync layer and hand it an [`AttributePolicy`].
//!
//! Modules are organized by responsibility:
//! - [`manager`] hosts the cell plumbing and setters
//! - [`policy`] exposes the capability trait games implement
//! - [`snapshot`] defines the export/load wire shape
pub mod error;
pub mod manager;
pub mod policy;
pub mod snapshot;

pub use error::{ManagerError, Result};
pub use manager::{AttributeManager, ManagerConfig};
pub use policy::{AttributePolicy, OpenPolicy, ValueField};
pub use snapshot::AttributeSnapshot;
