//! Data-source query types
//!
//! A query carries a `queryType` discriminator, a list of subscriptions and
//! one payload section per query type. Only the section matching the
//! discriminator is read when binding variables; the others are kept as-is.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query type discriminator.
///
/// Unknown discriminators are preserved verbatim so that queries of other
/// plugins survive a round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryType {
    /// Metrics queries.
    AzureMonitor,
    /// Log queries (KQL against a workspace).
    AzureLogAnalytics,
    /// Resource Graph queries (KQL across subscriptions).
    AzureResourceGraph,
    /// Application Insights traces.
    AzureTraces,
    /// Any other discriminator.
    Other(String),
}

impl QueryType {
    /// Returns the wire name of the discriminator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AzureMonitor => "Azure Monitor",
            Self::AzureLogAnalytics => "Azure Log Analytics",
            Self::AzureResourceGraph => "Azure Resource Graph",
            Self::AzureTraces => "Azure Traces",
            Self::Other(name) => name,
        }
    }

    /// Returns the key of the payload section for this query type.
    #[must_use]
    pub const fn payload_key(&self) -> Option<&'static str> {
        match self {
            Self::AzureMonitor => Some("azureMonitor"),
            Self::AzureLogAnalytics => Some("azureLogAnalytics"),
            Self::AzureResourceGraph => Some("azureResourceGraph"),
            Self::AzureTraces => Some("azureTraces"),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for QueryType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Azure Monitor" => Self::AzureMonitor,
            "Azure Log Analytics" => Self::AzureLogAnalytics,
            "Azure Resource Graph" => Self::AzureResourceGraph,
            "Azure Traces" => Self::AzureTraces,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for QueryType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<QueryType> for String {
    fn from(value: QueryType) -> Self {
        match value {
            QueryType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the data source instance a query targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceRef {
    /// Plugin type identifier.
    #[serde(rename = "type")]
    pub kind: String,
    /// Instance identifier.
    pub uid: String,
}

impl DataSourceRef {
    /// Creates a new reference.
    #[must_use]
    pub fn new(kind: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            uid: uid.into(),
        }
    }
}

/// A data-source query.
///
/// Optional fields stay absent when absent in the input, so a query that
/// binding leaves alone serializes back to the document it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Identifier of the query within its panel.
    pub ref_id: String,

    /// Discriminator selecting the payload section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<QueryType>,

    /// Subscription identifiers, each possibly a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<String>>,

    /// Target data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,

    /// Hidden queries are still resolved but not displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,

    /// Payload sections keyed by name (e.g. `azureResourceGraph`).
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}

impl Query {
    /// Creates an empty query of the given type.
    #[must_use]
    pub fn new(ref_id: impl Into<String>, query_type: impl Into<QueryType>) -> Self {
        Self {
            ref_id: ref_id.into(),
            query_type: Some(query_type.into()),
            subscriptions: None,
            datasource: None,
            hide: None,
            sections: Map::new(),
        }
    }

    /// Sets the subscriptions (builder pattern).
    #[must_use]
    pub fn with_subscriptions<I, S>(mut self, subscriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscriptions = Some(subscriptions.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the payload section for this query's type (builder pattern).
    ///
    /// Queries of an unknown type have no payload section; the value is dropped.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        if let Some(key) = self.query_type.as_ref().and_then(QueryType::payload_key) {
            self.sections.insert(key.to_string(), payload);
        }
        self
    }

    /// Sets the data source reference (builder pattern).
    #[must_use]
    pub fn with_datasource(mut self, datasource: DataSourceRef) -> Self {
        self.datasource = Some(datasource);
        self
    }

    /// Returns the subscriptions, empty when the field is absent.
    #[must_use]
    pub fn subscriptions(&self) -> &[String] {
        self.subscriptions.as_deref().unwrap_or_default()
    }

    /// Returns the type-specific payload, if present.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        let key = self.query_type.as_ref()?.payload_key()?;
        self.sections.get(key)
    }

    /// Returns the type-specific payload for modification, if present.
    pub fn payload_mut(&mut self) -> Option<&mut Value> {
        let key = self.query_type.as_ref()?.payload_key()?;
        self.sections.get_mut(key)
    }
}

/// A query after variable binding.
///
/// `Borrowed` when binding left the query untouched, `Owned` otherwise.
pub type ResolvedQuery<'a> = Cow<'a, Query>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_query_type_wire_names() {
        assert_eq!(QueryType::from("Azure Resource Graph"), QueryType::AzureResourceGraph);
        assert_eq!(
            QueryType::from("Grafana Template Variable Function"),
            QueryType::Other("Grafana Template Variable Function".into())
        );
        assert_eq!(String::from(QueryType::AzureTraces), "Azure Traces");
        assert_eq!(QueryType::Other("x".into()).to_string(), "x");
    }

    #[test]
    fn test_payload_section_follows_type() {
        let query = Query::new("A", QueryType::AzureResourceGraph)
            .with_payload(json!({"query": "Resources", "resultFormat": "table"}));

        assert_eq!(query.payload(), Some(&json!({"query": "Resources", "resultFormat": "table"})));
        assert!(query.sections.contains_key("azureResourceGraph"));

        let other = Query::new("B", "Custom").with_payload(json!({"query": "x"}));
        assert!(other.payload().is_none());
        assert!(other.sections.is_empty());
    }

    #[test]
    fn test_deserialize_keeps_unknown_sections() {
        let query: Query = serde_json::from_value(json!({
            "refId": "A",
            "queryType": "Azure Resource Graph",
            "subscriptions": ["$subs"],
            "azureResourceGraph": {"query": "Resources | $var1", "resultFormat": "table"},
            "azureMonitor": {"aggregation": "Average"},
            "datasource": {"type": "grafana-azure-monitor-datasource", "uid": "abc"}
        }))
        .unwrap();

        assert_eq!(query.query_type, Some(QueryType::AzureResourceGraph));
        assert_eq!(query.subscriptions(), vec!["$subs"]);
        assert_eq!(query.sections.len(), 2);
        assert_eq!(
            query.datasource,
            Some(DataSourceRef::new("grafana-azure-monitor-datasource", "abc"))
        );

        let back = serde_json::to_value(&query).unwrap();
        assert_eq!(back["azureMonitor"], json!({"aggregation": "Average"}));
        assert_eq!(back["queryType"], json!("Azure Resource Graph"));
        assert!(back.get("hide").is_none());
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let query: Query = serde_json::from_value(json!({"refId": "A"})).unwrap();
        assert_eq!(query.query_type, None);
        assert!(query.subscriptions().is_empty());
        assert_eq!(query.hide, None);
        assert!(query.payload().is_none());
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"refId": "A"}));
    }

    #[test]
    fn test_round_trip_keeps_input_shape() {
        let document = json!({
            "refId": "A",
            "hide": false,
            "subscriptions": [],
            "someField": {"x": "$v"}
        });
        let query: Query = serde_json::from_value(document.clone()).unwrap();

        assert_eq!(query.hide, Some(false));
        assert_eq!(query.subscriptions, Some(Vec::new()));
        assert_eq!(serde_json::to_value(&query).unwrap(), document);
    }
}
