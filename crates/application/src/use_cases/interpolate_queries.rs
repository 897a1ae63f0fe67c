//! Interpolate queries use case
//!
//! The data-source facing entry points: a batch of queries on their way to
//! the backend, and single queries about to be executed.

use querybind_domain::query::{Query, ResolvedQuery};
use querybind_domain::settings::ResolverSettings;
use querybind_domain::variable::ScopedVars;
use serde_json::Value;
use tracing::debug;

use crate::binding::QueryBinder;
use crate::ports::TemplateSource;

/// Applies template variables to data-source queries.
pub struct InterpolateQueries<S> {
    source: S,
    binder: QueryBinder,
    settings: ResolverSettings,
}

impl<S: TemplateSource> InterpolateQueries<S> {
    /// Creates the use case with default settings.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_settings(source, ResolverSettings::default())
    }

    /// Creates the use case with explicit settings.
    #[must_use]
    pub fn with_settings(source: S, settings: ResolverSettings) -> Self {
        Self {
            source,
            binder: QueryBinder::from_settings(&settings),
            settings,
        }
    }

    /// Returns the settings in use.
    #[must_use]
    pub const fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolves a batch of queries.
    ///
    /// `scoped` is merged over the source's variables. Output order and length
    /// match the input. Each query goes through the same steps as
    /// [`Self::apply_template_variables`]; queries without a data source also
    /// get the configured one.
    #[must_use]
    pub fn interpolate_variables_in_queries(&self, queries: &[Query], scoped: &ScopedVars) -> Vec<Query> {
        let store = self.source.snapshot(scoped);
        debug!(queries = queries.len(), scoped = scoped.len(), "interpolating queries");

        self.binder
            .bind_all(queries, &store)
            .into_iter()
            .map(|resolved| {
                let mut query = self.fill_result_format(resolved).into_owned();
                if query.datasource.is_none() {
                    query.datasource.clone_from(&self.settings.datasource);
                }
                query
            })
            .collect()
    }

    /// Resolves one query before execution.
    ///
    /// Interpolable queries also get the default `resultFormat` when theirs is
    /// missing or empty.
    #[must_use]
    pub fn apply_template_variables(&self, query: &Query, scoped: &ScopedVars) -> Query {
        let store = self.source.snapshot(scoped);
        self.fill_result_format(self.binder.bind(query, &store))
            .into_owned()
    }

    fn fill_result_format<'q>(&self, mut query: ResolvedQuery<'q>) -> ResolvedQuery<'q> {
        let missing = self.binder.accepts(&query)
            && query
                .payload()
                .and_then(Value::as_object)
                .is_some_and(|payload| {
                    payload
                        .get("resultFormat")
                        .is_none_or(|format| format.as_str().is_none_or(str::is_empty))
                });

        if missing && let Some(Value::Object(payload)) = query.to_mut().payload_mut() {
            payload.insert(
                "resultFormat".to_string(),
                Value::String(self.settings.default_result_format.clone()),
            );
        }
        query
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use querybind_domain::query::{DataSourceRef, QueryType};
    use querybind_domain::variable::{ScopedVar, TemplateVariable, VariableStore};
    use serde_json::json;

    fn create_test_source() -> VariableStore {
        VariableStore::new(vec![
            TemplateVariable::subscriptions("subs", ["sub-foo", "sub-baz"]),
            TemplateVariable::single("var1", "var1-foo"),
            TemplateVariable::multi("var3", ["var3-foo", "var3-baz"]),
        ])
        .expect("valid store")
    }

    fn create_test_query(text: &str, result_format: &str) -> Query {
        Query::new("A", QueryType::AzureResourceGraph)
            .with_payload(json!({"query": text, "resultFormat": result_format}))
    }

    fn datasource() -> DataSourceRef {
        DataSourceRef::new("grafana-azure-monitor-datasource", "azure")
    }

    #[test]
    fn test_unchanged_without_variables() {
        let use_case = InterpolateQueries::new(VariableStore::empty());
        let query = create_test_query("Resources", "table").with_datasource(datasource());

        let resolved = use_case.interpolate_variables_in_queries(&[query.clone()], &ScopedVars::new());
        assert_eq!(resolved, vec![query]);
    }

    #[test]
    fn test_batch_replaces_and_stamps_datasource() {
        let settings = ResolverSettings::default().with_datasource(datasource());
        let use_case = InterpolateQueries::with_settings(create_test_source(), settings);
        let queries = vec![
            create_test_query("Resources | $var1", "table"),
            create_test_query("Resources", "objects").with_datasource(DataSourceRef::new("other", "x")),
        ];

        let resolved = use_case.interpolate_variables_in_queries(&queries, &ScopedVars::new());
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].payload().unwrap()["query"], "Resources | var1-foo");
        assert_eq!(resolved[0].datasource, Some(datasource()));
        assert_eq!(resolved[1].datasource, Some(DataSourceRef::new("other", "x")));
    }

    #[test]
    fn test_batch_fills_result_format() {
        let use_case = InterpolateQueries::new(create_test_source());
        let queries = vec![
            create_test_query("Resources | $var1", ""),
            create_test_query("Resources", ""),
            create_test_query("Resources", "objects"),
        ];

        let resolved = use_case.interpolate_variables_in_queries(&queries, &ScopedVars::new());
        assert_eq!(
            resolved[0].payload(),
            Some(&json!({"query": "Resources | var1-foo", "resultFormat": "table"}))
        );
        assert_eq!(resolved[1].payload().unwrap()["resultFormat"], "table");
        assert_eq!(resolved[2], queries[2]);
    }

    #[test]
    fn test_batch_keeps_untyped_query_as_written() {
        let use_case = InterpolateQueries::new(VariableStore::empty());
        let document = json!({"refId": "A", "hide": false, "someField": {"x": "$v"}});
        let query: Query = serde_json::from_value(document.clone()).unwrap();

        let resolved = use_case.interpolate_variables_in_queries(&[query], &ScopedVars::new());
        assert_eq!(serde_json::to_value(&resolved[0]).unwrap(), document);
    }

    #[test]
    fn test_scoped_vars_override() {
        let use_case = InterpolateQueries::new(create_test_source());
        let mut scoped = ScopedVars::new();
        scoped.insert("var1".into(), ScopedVar::new("from-panel"));

        let resolved =
            use_case.interpolate_variables_in_queries(&[create_test_query("Resources | $var1", "table")], &scoped);
        assert_eq!(resolved[0].payload().unwrap()["query"], "Resources | from-panel");
    }

    #[test]
    fn test_apply_single_value() {
        let use_case = InterpolateQueries::new(create_test_source());
        let query = create_test_query("Resources | $var1", "");

        let resolved = use_case.apply_template_variables(&query, &ScopedVars::new());
        assert_eq!(
            resolved.payload(),
            Some(&json!({"query": "Resources | var1-foo", "resultFormat": "table"}))
        );
        assert_eq!(resolved.query_type, Some(QueryType::AzureResourceGraph));
        assert!(resolved.subscriptions().is_empty());
    }

    #[test]
    fn test_apply_multi_value() {
        let use_case = InterpolateQueries::new(create_test_source());
        let query = create_test_query("resources | where $__contains(name, $var3)", "");

        let resolved = use_case.apply_template_variables(&query, &ScopedVars::new());
        assert_eq!(
            resolved.payload(),
            Some(&json!({
                "query": "resources | where $__contains(name, 'var3-foo','var3-baz')",
                "resultFormat": "table"
            }))
        );
    }

    #[test]
    fn test_apply_subscriptions() {
        let use_case = InterpolateQueries::new(create_test_source());
        let query = create_test_query("resources | where $__contains(name)", "").with_subscriptions(["$subs"]);

        let resolved = use_case.apply_template_variables(&query, &ScopedVars::new());
        assert_eq!(resolved.subscriptions(), vec!["sub-foo", "sub-baz"]);
        assert_eq!(resolved.payload().unwrap()["resultFormat"], "table");
    }

    #[test]
    fn test_apply_keeps_explicit_result_format() {
        let use_case = InterpolateQueries::new(create_test_source());
        let query = Query::new("A", QueryType::AzureResourceGraph).with_payload(json!({"query": "Resources", "resultFormat": "objects"}));

        let resolved = use_case.apply_template_variables(&query, &ScopedVars::new());
        assert_eq!(resolved, query);

        let missing = Query::new("A", QueryType::AzureResourceGraph).with_payload(json!({"query": "Resources"}));
        let resolved = use_case.apply_template_variables(&missing, &ScopedVars::new());
        assert_eq!(resolved.payload().unwrap()["resultFormat"], "table");
    }

    #[test]
    fn test_apply_skips_other_query_types() {
        let use_case = InterpolateQueries::new(create_test_source());
        let query = Query::new("B", QueryType::AzureMonitor).with_payload(json!({"metricName": "$var1"}));

        assert_eq!(use_case.apply_template_variables(&query, &ScopedVars::new()), query);
    }
}
