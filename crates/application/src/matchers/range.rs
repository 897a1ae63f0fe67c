//! The `between` matcher.

use querybind_domain::matcher::{MatcherOptions, RangeOptions, ValidationState, ValueMatcherId};
use querybind_domain::variable::VariableStore;
use tracing::debug;

use super::validators::{cell_number, number_or_variable_validator, parse_number};
use super::{ValueMatcher, ValuePredicate, never};
use crate::variable_resolver::{Interpolator, VariableFormat};

/// Matches numeric cells within an inclusive range.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeMatcher;

impl RangeMatcher {
    /// Validates range bounds independently.
    #[must_use]
    pub fn validate_range(options: &RangeOptions) -> ValidationState {
        ValidationState::Range {
            from: !number_or_variable_validator(&options.from),
            to: !number_or_variable_validator(&options.to),
        }
    }
}

impl ValueMatcher for RangeMatcher {
    fn id(&self) -> ValueMatcherId {
        ValueMatcherId::Between
    }

    fn name(&self) -> &'static str {
        "Is between"
    }

    fn description(&self) -> &'static str {
        "Match when field value is between given option values."
    }

    fn default_options(&self) -> MatcherOptions {
        RangeOptions::new("0", "100").into()
    }

    fn validate(&self, options: &MatcherOptions) -> ValidationState {
        options.as_range().map_or(
            ValidationState::Range {
                from: true,
                to: true,
            },
            Self::validate_range,
        )
    }

    fn build_predicate(&self, options: &MatcherOptions, store: &VariableStore) -> ValuePredicate {
        let Some(range) = options.as_range() else {
            return never();
        };

        let interpolator = Interpolator::new(store);
        let from = parse_number(&interpolator.resolve(&range.from, VariableFormat::Scalar));
        let to = parse_number(&interpolator.resolve(&range.to, VariableFormat::Scalar));

        match (from, to) {
            (Some(from), Some(to)) => Box::new(move |cell| {
                cell_number(cell).is_some_and(|value| from <= value && value <= to)
            }),
            _ => {
                debug!(from = %range.from, to = %range.to, "range bound is not a number after resolution");
                never()
            }
        }
    }
}
