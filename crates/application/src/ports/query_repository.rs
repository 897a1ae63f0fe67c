//! Query repository port

use async_trait::async_trait;
use std::path::Path;

use querybind_domain::query::Query;

use super::RepositoryError;

/// Repository trait for query batches.
#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// Loads a batch of queries, in document order.
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` if the document doesn't exist.
    async fn load(&self, path: &Path) -> Result<Vec<Query>, RepositoryError>;

    /// Saves a batch of queries.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    async fn save(&self, path: &Path, queries: &[Query]) -> Result<(), RepositoryError>;
}
