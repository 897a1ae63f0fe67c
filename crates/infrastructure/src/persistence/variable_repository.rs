//! File-based template variable repository.
//!
//! A variables document is either wrapped or a bare list:
//!
//! ```text
//! variables:
//!   - name: var1
//!     currentValue: var1-foo
//! ```
//!
//! JSON or YAML, chosen by extension.

use std::path::Path;

use async_trait::async_trait;
use querybind_application::ports::{FileSystem, RepositoryError, VariableRepository};
use querybind_domain::variable::TemplateVariable;
use serde::Deserialize;
use tracing::debug;

use crate::serialization::DocumentFormat;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VariablesDocument {
    Wrapped { variables: Vec<TemplateVariable> },
    Bare(Vec<TemplateVariable>),
}

/// File-based variable repository.
#[derive(Debug, Clone, Default)]
pub struct FileVariableRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileVariableRepository<F> {
    /// Creates a new file-based variable repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem + Sync> VariableRepository for FileVariableRepository<F> {
    async fn load(&self, path: &Path) -> Result<Vec<TemplateVariable>, RepositoryError> {
        let content = self.fs.read_file(path).await?;

        let document: VariablesDocument = DocumentFormat::from_path(path)
            .parse(&content)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let variables = match document {
            VariablesDocument::Wrapped { variables } | VariablesDocument::Bare(variables) => variables,
        };
        debug!(path = %path.display(), variables = variables.len(), "loaded variables");
        Ok(variables)
    }
}
