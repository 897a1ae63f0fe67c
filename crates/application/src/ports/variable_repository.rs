//! Variable repository port

use async_trait::async_trait;
use std::path::Path;

use querybind_domain::variable::TemplateVariable;

use super::RepositoryError;

/// Repository trait for template variable documents.
#[async_trait]
pub trait VariableRepository: Send + Sync {
    /// Loads the variables of a document, in document order.
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` if the document doesn't exist.
    async fn load(&self, path: &Path) -> Result<Vec<TemplateVariable>, RepositoryError>;
}
