//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod file_system;
mod query_repository;
mod template_source;
mod variable_repository;

use std::path::PathBuf;

pub use file_system::{FileSystem, FileSystemError};
pub use query_repository::QueryRepository;
pub use template_source::TemplateSource;
pub use variable_repository::VariableRepository;

/// Errors that can occur while loading or saving documents.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Document not found.
    #[error("Document not found: {0}")]
    NotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The document parsed but its content is not acceptable.
    #[error("Invalid document: {0}")]
    Invalid(String),
}

impl From<FileSystemError> for RepositoryError {
    fn from(error: FileSystemError) -> Self {
        match error {
            FileSystemError::NotFound(path) => Self::NotFound(path),
            FileSystemError::Io(e) => Self::Io(e),
            other => Self::Invalid(other.to_string()),
        }
    }
}
