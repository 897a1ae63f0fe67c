//! Variable interpolation engine
//!
//! Replaces placeholder tokens with the current values of the variables in a
//! [`VariableStore`] snapshot. Tokens naming unknown variables are kept
//! verbatim so that text written for another context survives unchanged.

use querybind_domain::variable::{TemplateVariable, VariableStore, VariableValue};

use super::parser::parse_variables;

/// How the values of a variable are rendered at the substitution point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariableFormat {
    /// Embedded in predicate text: multi values are quoted and comma-joined,
    /// `'a','b'`. Single values are substituted as plain text.
    #[default]
    Scalar,
    /// Destined for a list field: values are comma-joined unquoted, `a,b`.
    ListJoin,
    /// Embedded in a regular expression: multi values become an escaped
    /// alternation, `(a|b)`.
    Regex,
}

/// Result of variable resolution for a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The resolved string with all known variables substituted.
    pub resolved: String,

    /// Names of the variables that were substituted, in token order.
    pub resolved_variables: Vec<String>,

    /// Names of tokens that matched no variable, in token order.
    pub unresolved: Vec<String>,

    /// Whether every token was resolved.
    pub is_complete: bool,
}

impl ResolutionResult {
    /// Creates a result for input with no variables.
    #[must_use]
    pub fn no_variables(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            resolved_variables: Vec::new(),
            unresolved: Vec::new(),
            is_complete: true,
        }
    }

    /// Returns the count of resolved tokens.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved_variables.len()
    }

    /// Returns the count of unresolved tokens.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

/// Renders a variable's current value in the given format.
#[must_use]
pub fn format_value(variable: &TemplateVariable, format: VariableFormat) -> String {
    match (&variable.current_value, format) {
        (VariableValue::Scalar(value), VariableFormat::Scalar) if variable.kind.is_multi_valued() => {
            quote(value)
        }
        (VariableValue::Scalar(value), _) => value.clone(),
        (VariableValue::List(values), VariableFormat::Scalar) => {
            values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(",")
        }
        (VariableValue::List(values), VariableFormat::ListJoin) => values.join(","),
        (VariableValue::List(values), VariableFormat::Regex) => match values.as_slice() {
            [only] => regex::escape(only),
            _ => {
                let escaped: Vec<String> = values.iter().map(|v| regex::escape(v)).collect();
                format!("({})", escaped.join("|"))
            }
        },
    }
}

fn quote(value: &str) -> String {
    format!("'{value}'")
}

/// The interpolator.
///
/// Borrows one snapshot for the duration of a resolution pass. Every call is
/// pure: the same input, snapshot and format always give the same output.
#[derive(Debug, Clone, Copy)]
pub struct Interpolator<'a> {
    store: &'a VariableStore,
}

impl<'a> Interpolator<'a> {
    /// Creates an interpolator over a snapshot.
    #[must_use]
    pub const fn new(store: &'a VariableStore) -> Self {
        Self { store }
    }

    /// Returns the snapshot this interpolator reads.
    #[must_use]
    pub const fn store(&self) -> &'a VariableStore {
        self.store
    }

    /// Resolves all known placeholders in the input.
    #[must_use]
    pub fn resolve(&self, input: &str, format: VariableFormat) -> String {
        self.resolve_detailed(input, format).resolved
    }

    /// Resolves all known placeholders and reports what was and was not resolved.
    #[must_use]
    pub fn resolve_detailed(&self, input: &str, format: VariableFormat) -> ResolutionResult {
        let references = parse_variables(input);

        if references.is_empty() {
            return ResolutionResult::no_variables(input);
        }

        let mut resolved_vars = Vec::new();
        let mut unresolved = Vec::new();
        let mut result = String::with_capacity(input.len());
        let mut last_end = 0;

        for var_ref in &references {
            // Append text before this variable
            result.push_str(&input[last_end..var_ref.span.start]);

            if let Some(variable) = self.store.get(&var_ref.name) {
                result.push_str(&format_value(variable, format));
                resolved_vars.push(var_ref.name.clone());
            } else {
                // Keep the original token for unresolved
                result.push_str(&input[var_ref.span.clone()]);
                unresolved.push(var_ref.name.clone());
            }

            last_end = var_ref.span.end;
        }

        result.push_str(&input[last_end..]);

        let is_complete = unresolved.is_empty();
        ResolutionResult {
            resolved: result,
            resolved_variables: resolved_vars,
            unresolved,
            is_complete,
        }
    }

    /// Returns the names of tokens in the input that match no variable.
    #[must_use]
    pub fn find_unresolved(&self, input: &str) -> Vec<String> {
        parse_variables(input)
            .into_iter()
            .filter(|r| !self.store.contains(&r.name))
            .map(|r| r.name)
            .collect()
    }

    /// Returns true if the input references at least one known variable.
    #[must_use]
    pub fn contains_template(&self, input: &str) -> bool {
        parse_variables(input)
            .iter()
            .any(|r| self.store.contains(&r.name))
    }
}
