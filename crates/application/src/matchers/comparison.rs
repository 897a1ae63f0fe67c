//! Equality and ordering matchers.

use querybind_domain::matcher::{MatcherOptions, ValidationState, ValueMatcherId, ValueOptions};
use querybind_domain::variable::VariableStore;

use super::validators::{cell_number, cell_text, number_or_variable_validator, parse_number};
use super::{ValueMatcher, ValuePredicate, never};
use crate::variable_resolver::{Interpolator, VariableFormat};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Equal to.
    Equal,
    /// Not equal to.
    NotEqual,
    /// Greater than.
    Greater,
    /// Greater than or equal to.
    GreaterOrEqual,
    /// Lower than.
    Lower,
    /// Lower than or equal to.
    LowerOrEqual,
}

impl ComparisonOperator {
    /// All operators, in registration order.
    pub const ALL: [Self; 6] = [
        Self::Equal,
        Self::NotEqual,
        Self::Greater,
        Self::GreaterOrEqual,
        Self::Lower,
        Self::LowerOrEqual,
    ];

    /// Get the symbol for this operator.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Lower => "<",
            Self::LowerOrEqual => "<=",
        }
    }

    /// Returns the matcher identifier of this operator.
    #[must_use]
    pub const fn matcher_id(&self) -> ValueMatcherId {
        match self {
            Self::Equal => ValueMatcherId::Equal,
            Self::NotEqual => ValueMatcherId::NotEqual,
            Self::Greater => ValueMatcherId::Greater,
            Self::GreaterOrEqual => ValueMatcherId::GreaterOrEqual,
            Self::Lower => ValueMatcherId::Lower,
            Self::LowerOrEqual => ValueMatcherId::LowerOrEqual,
        }
    }

    /// Returns true for operators that need numeric operands.
    #[must_use]
    pub const fn is_ordering(&self) -> bool {
        !matches!(self, Self::Equal | Self::NotEqual)
    }

    #[allow(clippy::float_cmp)]
    fn compare(self, left: f64, right: f64) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::Greater => left > right,
            Self::GreaterOrEqual => left >= right,
            Self::Lower => left < right,
            Self::LowerOrEqual => left <= right,
        }
    }
}

/// Compares cells against a single operand.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonMatcher {
    operator: ComparisonOperator,
}

impl ComparisonMatcher {
    /// Creates a matcher for the operator.
    #[must_use]
    pub const fn new(operator: ComparisonOperator) -> Self {
        Self { operator }
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> ComparisonOperator {
        self.operator
    }
}

impl ValueMatcher for ComparisonMatcher {
    fn id(&self) -> ValueMatcherId {
        self.operator.matcher_id()
    }

    fn name(&self) -> &'static str {
        match self.operator {
            ComparisonOperator::Equal => "Is equal",
            ComparisonOperator::NotEqual => "Is not equal",
            ComparisonOperator::Greater => "Is greater",
            ComparisonOperator::GreaterOrEqual => "Is greater or equal",
            ComparisonOperator::Lower => "Is lower",
            ComparisonOperator::LowerOrEqual => "Is lower or equal",
        }
    }

    fn description(&self) -> &'static str {
        match self.operator {
            ComparisonOperator::Equal => "Match where value for given field is equal to options value.",
            ComparisonOperator::NotEqual => {
                "Match where value for given field is not equal to options value."
            }
            ComparisonOperator::Greater => "Match when field value is greater than option.",
            ComparisonOperator::GreaterOrEqual => {
                "Match when field value is greater than or equal to option."
            }
            ComparisonOperator::Lower => "Match when field value is lower than option.",
            ComparisonOperator::LowerOrEqual => {
                "Match when field value is lower than or equal to option."
            }
        }
    }

    fn default_options(&self) -> MatcherOptions {
        let value = if self.operator.is_ordering() { "0" } else { "" };
        ValueOptions::new(value).into()
    }

    fn validate(&self, options: &MatcherOptions) -> ValidationState {
        let invalid = options.as_value().is_none_or(|o| {
            self.operator.is_ordering() && !number_or_variable_validator(&o.value)
        });
        ValidationState::Value { value: invalid }
    }

    fn build_predicate(&self, options: &MatcherOptions, store: &VariableStore) -> ValuePredicate {
        let Some(options) = options.as_value() else {
            return never();
        };

        let operand = Interpolator::new(store).resolve(&options.value, VariableFormat::Scalar);
        let number = parse_number(&operand);
        let operator = self.operator;

        if operator.is_ordering() {
            let Some(number) = number else {
                return never();
            };
            return Box::new(move |cell| {
                cell_number(cell).is_some_and(|value| operator.compare(value, number))
            });
        }

        let equal = operator == ComparisonOperator::Equal;
        Box::new(move |cell| {
            let same = match (number, cell_number(cell)) {
                (Some(expected), Some(actual)) => ComparisonOperator::Equal.compare(actual, expected),
                _ => cell_text(cell).is_some_and(|text| text == operand),
            };
            same == equal
        })
    }
}
