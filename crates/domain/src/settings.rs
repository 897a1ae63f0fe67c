//! Resolver settings domain model
//!
//! Defines the knobs of a resolution pass that are not part of the query.

use serde::{Deserialize, Serialize};

use crate::query::{DataSourceRef, QueryType};

/// Result format applied to a payload whose `resultFormat` is missing or empty.
pub const DEFAULT_RESULT_FORMAT: &str = "table";

/// Settings for variable binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Fallback `resultFormat` of a payload.
    pub default_result_format: String,

    /// Query types whose payload and subscriptions are interpolated.
    pub interpolable_query_types: Vec<QueryType>,

    /// Data source reference stamped on queries that carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            default_result_format: DEFAULT_RESULT_FORMAT.to_string(),
            interpolable_query_types: vec![QueryType::AzureResourceGraph],
            datasource: None,
        }
    }
}

impl ResolverSettings {
    /// Returns true if queries of this type are interpolated.
    #[must_use]
    pub fn is_interpolable(&self, query_type: &QueryType) -> bool {
        self.interpolable_query_types.contains(query_type)
    }

    /// Sets the data source reference (builder pattern).
    #[must_use]
    pub fn with_datasource(mut self, datasource: DataSourceRef) -> Self {
        self.datasource = Some(datasource);
        self
    }
}
