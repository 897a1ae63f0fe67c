//! Placeholder token parser
//!
//! Recognises `$name`, `${name}` and `[[name]]` references, where `name` is
//! a run of ASCII letters, digits and underscores.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)\}|\$([A-Za-z0-9_]+)|\[\[([A-Za-z0-9_]+)\]\]")
        .expect("valid token regex")
});

/// The syntax a placeholder was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSyntax {
    /// `$name`
    Dollar,
    /// `${name}`
    Braced,
    /// `[[name]]`
    Brackets,
}

/// A placeholder found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name, without decoration.
    pub name: String,

    /// How the placeholder was written.
    pub syntax: TokenSyntax,

    /// Byte range in the original string where this reference appears.
    pub span: Range<usize>,
}

impl VariableReference {
    /// Creates a new variable reference.
    #[must_use]
    pub fn new(name: impl Into<String>, syntax: TokenSyntax, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            syntax,
            span,
        }
    }
}

/// Parses a string and extracts all placeholder references, left to right.
///
/// Matches never overlap; `$__contains(name, $var)` yields `__contains` and
/// `var`.
///
/// # Examples
///
/// ```
/// use querybind_application::variable_resolver::parser::parse_variables;
///
/// let refs = parse_variables("Resources | where name == '$name' and id in ([[ids]])");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "name");
/// assert_eq!(refs[1].name, "ids");
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    TOKEN_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            let span = caps.get(0)?.range();
            let (name, syntax) = if let Some(m) = caps.get(1) {
                (m.as_str(), TokenSyntax::Braced)
            } else if let Some(m) = caps.get(2) {
                (m.as_str(), TokenSyntax::Dollar)
            } else {
                (caps.get(3)?.as_str(), TokenSyntax::Brackets)
            };
            Some(VariableReference::new(name, syntax, span))
        })
        .collect()
}

/// Returns true if the whole input is exactly one placeholder.
#[must_use]
pub fn is_variable_token(input: &str) -> bool {
    match parse_variables(input).as_slice() {
        [only] => only.span == (0..input.len()),
        _ => false,
    }
}

/// Extracts just the variable names from the input without full parsing info.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_variables(input)
        .into_iter()
        .map(|r| r.name)
        .collect()
}
