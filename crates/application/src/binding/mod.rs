//! Query binding
//!
//! Applies a variable snapshot to data-source queries. Only the payload
//! section selected by the query type and the `subscriptions` list are
//! touched; everything else is carried over as-is.

mod walk;

use std::borrow::Cow;

use querybind_domain::query::{Query, QueryType, ResolvedQuery};
use querybind_domain::settings::ResolverSettings;
use querybind_domain::variable::VariableStore;
use tracing::{debug, trace};

use crate::variable_resolver::Interpolator;

/// Binds variables into queries.
///
/// The binder is stateless apart from the set of query types it interpolates;
/// one instance can be shared across threads and resolution passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBinder {
    interpolable: Vec<QueryType>,
}

impl Default for QueryBinder {
    fn default() -> Self {
        Self::new(vec![QueryType::AzureResourceGraph])
    }
}

impl QueryBinder {
    /// Creates a binder for the given query types.
    #[must_use]
    pub const fn new(interpolable: Vec<QueryType>) -> Self {
        Self { interpolable }
    }

    /// Creates a binder from resolver settings.
    #[must_use]
    pub fn from_settings(settings: &ResolverSettings) -> Self {
        Self::new(settings.interpolable_query_types.clone())
    }

    /// Returns true if queries of this type are interpolated.
    #[must_use]
    pub fn is_interpolable(&self, query_type: &QueryType) -> bool {
        self.interpolable.contains(query_type)
    }

    /// Returns true if the query is interpolated. Untyped queries never are.
    #[must_use]
    pub fn accepts(&self, query: &Query) -> bool {
        query
            .query_type
            .as_ref()
            .is_some_and(|query_type| self.is_interpolable(query_type))
    }

    /// Binds one query.
    ///
    /// Returns the input borrowed when no placeholder of a known variable
    /// occurs in it, or when its type is not interpolated.
    #[must_use]
    pub fn bind<'q>(&self, query: &'q Query, store: &VariableStore) -> ResolvedQuery<'q> {
        if !self.accepts(query) {
            trace!(ref_id = %query.ref_id, query_type = ?query.query_type, "query type not interpolated");
            return Cow::Borrowed(query);
        }

        let interpolator = Interpolator::new(store);

        let payload = query
            .payload()
            .and_then(|payload| walk::interpolate_value(&interpolator, payload));
        let subscriptions = walk::expand_subscriptions(&interpolator, query.subscriptions());

        if payload.is_none() && subscriptions.is_none() {
            trace!(ref_id = %query.ref_id, "query unchanged");
            return Cow::Borrowed(query);
        }

        let mut resolved = query.clone();
        if let Some(payload) = payload
            && let Some(slot) = resolved.payload_mut()
        {
            *slot = payload;
        }
        if let Some(subscriptions) = subscriptions {
            resolved.subscriptions = Some(subscriptions);
        }

        trace!(ref_id = %query.ref_id, "query bound");
        Cow::Owned(resolved)
    }

    /// Binds every query of a batch.
    ///
    /// The output has the same length and order as the input. A query that
    /// cannot be interpolated is passed through, never dropped.
    #[must_use]
    pub fn bind_all<'q>(&self, queries: &'q [Query], store: &VariableStore) -> Vec<ResolvedQuery<'q>> {
        debug!(queries = queries.len(), variables = store.len(), "binding query batch");
        queries.iter().map(|query| self.bind(query, store)).collect()
    }
}
