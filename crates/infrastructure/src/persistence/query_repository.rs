//! File-based query batch repository.
//!
//! Batches are JSON arrays of queries, or an object with a `queries` array
//! (the shape of a panel's `targets` export). Saved batches are bare arrays
//! in stable JSON.

use std::path::Path;

use async_trait::async_trait;
use querybind_application::ports::{FileSystem, QueryRepository, RepositoryError};
use querybind_domain::query::Query;
use serde::Deserialize;
use tracing::debug;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QueriesDocument {
    Wrapped { queries: Vec<Query> },
    Bare(Vec<Query>),
}

/// File-based query repository.
#[derive(Debug, Clone, Default)]
pub struct FileQueryRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileQueryRepository<F> {
    /// Creates a new file-based query repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem + Sync> QueryRepository for FileQueryRepository<F> {
    async fn load(&self, path: &Path) -> Result<Vec<Query>, RepositoryError> {
        let content = self.fs.read_file(path).await?;

        let document: QueriesDocument =
            from_json_bytes(&content).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let queries = match document {
            QueriesDocument::Wrapped { queries } | QueriesDocument::Bare(queries) => queries,
        };
        debug!(path = %path.display(), queries = queries.len(), "loaded queries");
        Ok(queries)
    }

    async fn save(&self, path: &Path, queries: &[Query]) -> Result<(), RepositoryError> {
        let content =
            to_json_stable_bytes(&queries).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        self.fs.write_file(path, &content).await?;
        Ok(())
    }
}
