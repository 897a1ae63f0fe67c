//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building snapshots.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A variable name is empty or contains characters outside `[A-Za-z0-9_]`.
    #[error("invalid variable name: {0:?}")]
    InvalidVariableName(String),

    /// Two variables with the same name were given to one snapshot.
    #[error("duplicate variable: {0}")]
    DuplicateVariable(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
