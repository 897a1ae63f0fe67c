//! Value matcher options and validation state
//!
//! These types describe the configuration of a filter-by-value matcher. The
//! matchers themselves (validation and predicates) live in the application
//! layer.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a value matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueMatcherId {
    /// Value lies within an inclusive range.
    Between,
    /// Value matches a regular expression.
    Regex,
    /// Value equals the option value.
    Equal,
    /// Value differs from the option value.
    NotEqual,
    /// Value is greater than the option value.
    Greater,
    /// Value is greater than or equal to the option value.
    GreaterOrEqual,
    /// Value is lower than the option value.
    Lower,
    /// Value is lower than or equal to the option value.
    LowerOrEqual,
    /// Value is null.
    IsNull,
    /// Value is not null.
    IsNotNull,
}

impl ValueMatcherId {
    /// Returns the wire identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::Regex => "regex",
            Self::Equal => "equal",
            Self::NotEqual => "notEqual",
            Self::Greater => "greater",
            Self::GreaterOrEqual => "greaterOrEqual",
            Self::Lower => "lower",
            Self::LowerOrEqual => "lowerOrEqual",
            Self::IsNull => "isNull",
            Self::IsNotNull => "isNotNull",
        }
    }
}

impl fmt::Display for ValueMatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads an option operand stored either as text or as a JSON number.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Operand {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Operand::deserialize(deserializer)? {
        Operand::Text(text) => text,
        Operand::Number(number) => number.to_string(),
    })
}

/// Options of the range matcher. Each bound is a number or a variable token.
///
/// Numeric bounds in a stored configuration are read as their text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RangeOptions {
    /// Lower bound (inclusive).
    #[serde(deserialize_with = "text_or_number")]
    pub from: String,
    /// Upper bound (inclusive).
    #[serde(deserialize_with = "text_or_number")]
    pub to: String,
}

impl RangeOptions {
    /// Creates range options.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns the raw text of one bound.
    #[must_use]
    pub fn get(&self, field: RangeField) -> &str {
        match field {
            RangeField::From => &self.from,
            RangeField::To => &self.to,
        }
    }

    /// Returns a copy with one bound replaced.
    #[must_use]
    pub fn with(&self, field: RangeField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match field {
            RangeField::From => next.from = value.into(),
            RangeField::To => next.to = value.into(),
        }
        next
    }
}

/// Options of single-value matchers (regex, equality, comparisons).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValueOptions {
    /// Pattern or operand; may be a variable token.
    #[serde(deserialize_with = "text_or_number")]
    pub value: String,
}

impl ValueOptions {
    /// Creates single-value options.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Options of any matcher.
///
/// `null` and `{}` both read as [`MatcherOptions::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MatcherOptions {
    /// Range bounds.
    Range(RangeOptions),
    /// A single operand.
    Value(ValueOptions),
    /// No options.
    None,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EmptyOptions {}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredOptions {
    Range(RangeOptions),
    Value(ValueOptions),
    Empty(EmptyOptions),
    Null,
}

impl<'de> Deserialize<'de> for MatcherOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match StoredOptions::deserialize(deserializer)? {
            StoredOptions::Range(options) => Self::Range(options),
            StoredOptions::Value(options) => Self::Value(options),
            StoredOptions::Empty(_) | StoredOptions::Null => Self::None,
        })
    }
}

impl MatcherOptions {
    /// Returns the range options, if this is a range configuration.
    #[must_use]
    pub const fn as_range(&self) -> Option<&RangeOptions> {
        match self {
            Self::Range(options) => Some(options),
            _ => None,
        }
    }

    /// Returns the single-value options, if present.
    #[must_use]
    pub const fn as_value(&self) -> Option<&ValueOptions> {
        match self {
            Self::Value(options) => Some(options),
            _ => None,
        }
    }
}

impl From<RangeOptions> for MatcherOptions {
    fn from(options: RangeOptions) -> Self {
        Self::Range(options)
    }
}

impl From<ValueOptions> for MatcherOptions {
    fn from(options: ValueOptions) -> Self {
        Self::Value(options)
    }
}

/// A matcher as stored in a filter-by-value transform configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueMatcherConfig {
    /// Which matcher to use.
    pub id: ValueMatcherId,
    /// The matcher's options.
    #[serde(default = "no_options")]
    pub options: MatcherOptions,
}

const fn no_options() -> MatcherOptions {
    MatcherOptions::None
}

impl ValueMatcherConfig {
    /// Creates a matcher configuration.
    #[must_use]
    pub fn new(id: ValueMatcherId, options: impl Into<MatcherOptions>) -> Self {
        Self {
            id,
            options: options.into(),
        }
    }

    /// Creates a range matcher configuration.
    #[must_use]
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(ValueMatcherId::Between, RangeOptions::new(from, to))
    }
}

/// A bound of the range matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeField {
    /// The lower bound.
    From,
    /// The upper bound.
    To,
}

/// Per-field invalid flags of a matcher configuration.
///
/// A flag set to `true` marks the field as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationState {
    /// Flags of the range matcher.
    Range {
        /// The lower bound is invalid.
        from: bool,
        /// The upper bound is invalid.
        to: bool,
    },
    /// Flag of a single-value matcher.
    Value {
        /// The operand is invalid.
        value: bool,
    },
    /// The matcher has no options to validate.
    NoOptions,
}

impl ValidationState {
    /// Returns true when no field is flagged.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        match self {
            Self::Range { from, to } => !*from && !*to,
            Self::Value { value } => !*value,
            Self::NoOptions => true,
        }
    }

    /// Returns the flag of one range bound; `false` for non-range states.
    #[must_use]
    pub const fn is_invalid(&self, field: RangeField) -> bool {
        match (self, field) {
            (Self::Range { from, .. }, RangeField::From) => *from,
            (Self::Range { to, .. }, RangeField::To) => *to,
            _ => false,
        }
    }

    /// Returns a copy with one range flag replaced.
    ///
    /// Non-range states become a range state with the other flag cleared.
    #[must_use]
    pub const fn with_range_flag(self, field: RangeField, invalid: bool) -> Self {
        let (from, to) = match self {
            Self::Range { from, to } => (from, to),
            _ => (false, false),
        };
        match field {
            RangeField::From => Self::Range { from: invalid, to },
            RangeField::To => Self::Range { from, to: invalid },
        }
    }
}
