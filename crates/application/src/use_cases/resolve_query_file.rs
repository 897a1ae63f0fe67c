//! Resolve query file use case.

use std::path::PathBuf;

use querybind_domain::query::Query;
use querybind_domain::settings::ResolverSettings;
use querybind_domain::variable::{ScopedVars, VariableStore};
use tracing::info;

use super::InterpolateQueries;
use crate::error::ApplicationResult;
use crate::ports::{QueryRepository, VariableRepository};

/// Input for resolving a query document.
#[derive(Debug, Clone, Default)]
pub struct ResolveQueryFileInput {
    /// Path to the variables document.
    pub variables_path: PathBuf,
    /// Path to the query batch.
    pub queries_path: PathBuf,
    /// Per-call overrides merged over the variables.
    pub scoped: ScopedVars,
    /// Where to write the resolved batch, if anywhere.
    pub output_path: Option<PathBuf>,
}

/// Output of resolving a query document.
#[derive(Debug, Clone)]
pub struct ResolveQueryFileOutput {
    /// The resolved queries, in input order.
    pub queries: Vec<Query>,
    /// Number of variables in the snapshot.
    pub variable_count: usize,
}

/// Use case for resolving a query batch stored on disk.
pub struct ResolveQueryFile<V: VariableRepository, Q: QueryRepository> {
    variable_repo: V,
    query_repo: Q,
    settings: ResolverSettings,
}

impl<V: VariableRepository, Q: QueryRepository> ResolveQueryFile<V, Q> {
    /// Creates a new `ResolveQueryFile` use case.
    #[must_use]
    pub const fn new(variable_repo: V, query_repo: Q, settings: ResolverSettings) -> Self {
        Self {
            variable_repo,
            query_repo,
            settings,
        }
    }

    /// Loads variables and queries, resolves the batch and optionally saves it.
    ///
    /// # Errors
    /// - Returns error if either document cannot be loaded
    /// - Returns error if the variables have invalid or duplicate names
    /// - Returns error if the output cannot be written
    pub async fn execute(&self, input: ResolveQueryFileInput) -> ApplicationResult<ResolveQueryFileOutput> {
        let variables = self.variable_repo.load(&input.variables_path).await?;
        let store = VariableStore::new(variables)?;
        let queries = self.query_repo.load(&input.queries_path).await?;

        let variable_count = store.len();
        let resolved = InterpolateQueries::with_settings(store, self.settings.clone())
            .interpolate_variables_in_queries(&queries, &input.scoped);

        if let Some(output) = &input.output_path {
            self.query_repo.save(output, &resolved).await?;
            info!(path = %output.display(), queries = resolved.len(), "wrote resolved queries");
        }

        Ok(ResolveQueryFileOutput {
            queries: resolved,
            variable_count,
        })
    }
}
