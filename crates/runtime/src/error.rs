//! Error types surfaced by the attribute manager.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManagerError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ManagerError {
    /// A mutator was called after [`destroy`](crate::AttributeManager::destroy).
    ///
    /// Reads stay available on a disposed manager; writes fail explicitly
    /// instead of silently mutating released state.
    #[error("attribute manager used after destroy")]
    Disposed,
}
