//! The `isNull` and `isNotNull` matchers.

use querybind_domain::matcher::{MatcherOptions, ValidationState, ValueMatcherId};
use querybind_domain::variable::VariableStore;

use super::{ValueMatcher, ValuePredicate};

/// Matches `null` cells, or everything else when negated.
#[derive(Debug, Clone, Copy)]
pub struct NullMatcher {
    negate: bool,
}

impl NullMatcher {
    /// The `isNull` matcher.
    pub const IS_NULL: Self = Self { negate: false };

    /// The `isNotNull` matcher.
    pub const IS_NOT_NULL: Self = Self { negate: true };
}

impl ValueMatcher for NullMatcher {
    fn id(&self) -> ValueMatcherId {
        if self.negate {
            ValueMatcherId::IsNotNull
        } else {
            ValueMatcherId::IsNull
        }
    }

    fn name(&self) -> &'static str {
        if self.negate { "Is not null" } else { "Is null" }
    }

    fn description(&self) -> &'static str {
        if self.negate {
            "Match where value for given field is not null."
        } else {
            "Match where value for given field is null."
        }
    }

    fn default_options(&self) -> MatcherOptions {
        MatcherOptions::None
    }

    fn validate(&self, _options: &MatcherOptions) -> ValidationState {
        ValidationState::NoOptions
    }

    fn build_predicate(&self, _options: &MatcherOptions, _store: &VariableStore) -> ValuePredicate {
        let negate = self.negate;
        Box::new(move |cell| cell.is_null() != negate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_checks() {
        let store = VariableStore::empty();
        let is_null = NullMatcher::IS_NULL.build_predicate(&MatcherOptions::None, &store);
        let not_null = NullMatcher::IS_NOT_NULL.build_predicate(&MatcherOptions::None, &store);

        assert!(is_null(&json!(null)));
        assert!(!is_null(&json!(0)));
        assert!(!is_null(&json!("")));
        assert!(!not_null(&json!(null)));
        assert!(not_null(&json!("x")));
    }

    #[test]
    fn test_no_options() {
        assert_eq!(NullMatcher::IS_NOT_NULL.id(), ValueMatcherId::IsNotNull);
        assert_eq!(
            NullMatcher::IS_NULL.validate(&MatcherOptions::None),
            ValidationState::NoOptions
        );
    }
}
