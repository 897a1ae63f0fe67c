//! Application error types

use querybind_domain::{DomainError, ValueMatcherId};
use thiserror::Error;

use crate::ports::RepositoryError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Loading or saving through a repository failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// No matcher is registered under this identifier.
    #[error("unknown value matcher: {0}")]
    UnknownMatcher(ValueMatcherId),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
