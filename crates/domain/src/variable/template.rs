//! Template variable types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// How a variable's value is expanded in query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum VariableKind {
    /// One scalar value, substituted as plain text.
    #[default]
    Single,
    /// Several selected values.
    Multi,
    /// A list of account/subscription identifiers.
    SubscriptionList,
}

impl VariableKind {
    /// Returns true for kinds whose values are quoted in predicate text.
    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        matches!(self, Self::Multi | Self::SubscriptionList)
    }
}

/// The current value of a variable: one scalar or an ordered list of scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// A single value.
    Scalar(String),
    /// An ordered list of values.
    List(Vec<String>),
}

impl VariableValue {
    /// Returns the values as a slice-like vector of string references.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Scalar(value) => vec![value.as_str()],
            Self::List(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Returns true if this is a list value.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the display text: the scalar itself, or the values joined with `" + "`.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::List(values) => values.join(" + "),
        }
    }
}

impl Default for VariableValue {
    fn default() -> Self {
        Self::Scalar(String::new())
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for VariableValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for VariableValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

/// A named template variable as defined on a dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    /// Variable name, referenced as `$name` or `[[name]]`.
    pub name: String,

    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// How the value expands.
    #[serde(default)]
    pub kind: VariableKind,

    /// The currently selected value.
    #[serde(default, alias = "current")]
    pub current_value: VariableValue,
}

impl TemplateVariable {
    /// Creates a variable of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: VariableKind, value: impl Into<VariableValue>) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            current_value: value.into(),
        }
    }

    /// Creates a single-valued variable.
    #[must_use]
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, VariableKind::Single, VariableValue::Scalar(value.into()))
    }

    /// Creates a multi-valued variable.
    #[must_use]
    pub fn multi<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            VariableKind::Multi,
            VariableValue::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Creates a subscription-list variable.
    #[must_use]
    pub fn subscriptions<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            VariableKind::SubscriptionList,
            VariableValue::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Sets the display label (builder pattern).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the label, falling back to the name when unset or empty.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.name,
        }
    }

    /// Checks that the name can be referenced by a placeholder token.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVariableName` if the name is empty or
    /// contains characters outside `[A-Za-z0-9_]`.
    pub fn validate(&self) -> DomainResult<()> {
        if is_valid_variable_name(&self.name) {
            Ok(())
        } else {
            Err(DomainError::InvalidVariableName(self.name.clone()))
        }
    }
}

/// Valid names are non-empty runs of ASCII letters, digits and underscores.
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_single_variable() {
        let var = TemplateVariable::single("var1", "var1-foo");
        assert_eq!(var.kind, VariableKind::Single);
        assert_eq!(var.current_value, VariableValue::Scalar("var1-foo".into()));
        assert!(!var.kind.is_multi_valued());
    }

    #[test]
    fn test_multi_variable() {
        let var = TemplateVariable::multi("var3", ["var3-foo", "var3-baz"]);
        assert_eq!(var.kind, VariableKind::Multi);
        assert_eq!(var.current_value.values(), vec!["var3-foo", "var3-baz"]);
        assert!(var.kind.is_multi_valued());
    }

    #[test]
    fn test_display_label_falls_back_to_name() {
        let var = TemplateVariable::single("region", "eu");
        assert_eq!(var.display_label(), "region");

        let var = var.with_label("Region");
        assert_eq!(var.display_label(), "Region");

        let mut var = TemplateVariable::single("zone", "a");
        var.label = Some(String::new());
        assert_eq!(var.display_label(), "zone");
    }

    #[test]
    fn test_value_text() {
        assert_eq!(VariableValue::from("a").text(), "a");
        assert_eq!(VariableValue::from(vec!["a", "b"]).text(), "a + b");
    }

    #[test]
    fn test_variable_names() {
        assert!(is_valid_variable_name("var1"));
        assert!(is_valid_variable_name("__contains"));
        assert!(!is_valid_variable_name(""));
        assert!(!is_valid_variable_name("my-var"));
        assert!(!is_valid_variable_name("a b"));

        assert!(TemplateVariable::single("ok", "").validate().is_ok());
        assert_eq!(
            TemplateVariable::single("not ok", "").validate(),
            Err(DomainError::InvalidVariableName("not ok".into()))
        );
    }

    #[test]
    fn test_deserialize_value_shapes() {
        let var: TemplateVariable = serde_json::from_str(
            r#"{"name": "subs", "kind": "subscriptionList", "currentValue": ["sub-foo", "sub-baz"]}"#,
        )
        .unwrap();
        assert_eq!(var.kind, VariableKind::SubscriptionList);
        assert!(var.current_value.is_list());

        let var: TemplateVariable =
            serde_json::from_str(r#"{"name": "var1", "current": "var1-foo"}"#).unwrap();
        assert_eq!(var.kind, VariableKind::Single);
        assert_eq!(var.current_value, VariableValue::from("var1-foo"));
    }
}
