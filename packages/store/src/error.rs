//! Errors returned by [`crate::CrudService`] implementations.

use crate::models::EntityId;

/// Failure of a store operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A required text field was empty or whitespace only.
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// The targeted record no longer exists.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: EntityId },

    /// Transport or storage failure.
    #[error("store unavailable: {0}")]
    Service(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Service(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Service(format!("corrupt snapshot: {err}"))
    }
}
