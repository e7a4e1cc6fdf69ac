//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic failures only (malformed identifiers and handles).
/// Transport concerns are mapped at the HTTP boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A handle did not satisfy the handle character policy.
    #[error("invalid handle: {0:?}")]
    InvalidHandle(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_handle(raw: impl Into<String>) -> Self {
        Self::InvalidHandle(raw.into())
    }
}
