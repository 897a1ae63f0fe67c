//! The `regex` matcher.

use querybind_domain::matcher::{MatcherOptions, ValidationState, ValueMatcherId, ValueOptions};
use querybind_domain::variable::VariableStore;
use regex::Regex;
use tracing::debug;

use super::validators::cell_text;
use super::{ValueMatcher, ValuePredicate, never};
use crate::variable_resolver::{Interpolator, VariableFormat, is_variable_token};

/// Matches cells whose text matches a regular expression.
///
/// Multi-valued variables in the pattern expand to an escaped alternation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatcher;

impl ValueMatcher for RegexMatcher {
    fn id(&self) -> ValueMatcherId {
        ValueMatcherId::Regex
    }

    fn name(&self) -> &'static str {
        "Regex"
    }

    fn description(&self) -> &'static str {
        "Match when field value is matching regex."
    }

    fn default_options(&self) -> MatcherOptions {
        ValueOptions::new(".*").into()
    }

    fn validate(&self, options: &MatcherOptions) -> ValidationState {
        let invalid = options
            .as_value()
            .is_none_or(|o| !is_variable_token(&o.value) && Regex::new(&o.value).is_err());
        ValidationState::Value { value: invalid }
    }

    fn build_predicate(&self, options: &MatcherOptions, store: &VariableStore) -> ValuePredicate {
        let Some(options) = options.as_value() else {
            return never();
        };

        let pattern = Interpolator::new(store).resolve(&options.value, VariableFormat::Regex);
        match Regex::new(&pattern) {
            Ok(regex) => Box::new(move |cell| cell_text(cell).is_some_and(|text| regex.is_match(&text))),
            Err(e) => {
                debug!(pattern = %pattern, error = %e, "pattern does not compile after resolution");
                never()
            }
        }
    }
}
