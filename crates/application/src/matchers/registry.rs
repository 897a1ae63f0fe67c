//! Matcher lookup table.

use querybind_domain::matcher::{ValidationState, ValueMatcherConfig, ValueMatcherId};
use querybind_domain::variable::VariableStore;

use super::{
    ComparisonMatcher, ComparisonOperator, NullMatcher, RangeMatcher, RegexMatcher, ValueMatcher,
    ValuePredicate,
};
use crate::error::{ApplicationError, ApplicationResult};

/// Registry of value matchers, keyed by identifier.
///
/// Listing follows registration order.
#[derive(Default)]
pub struct ValueMatcherRegistry {
    matchers: Vec<Box<dyn ValueMatcher>>,
}

impl std::fmt::Debug for ValueMatcherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

impl ValueMatcherRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every standard matcher.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(RangeMatcher);
        registry.register(RegexMatcher);
        for operator in ComparisonOperator::ALL {
            registry.register(ComparisonMatcher::new(operator));
        }
        registry.register(NullMatcher::IS_NULL);
        registry.register(NullMatcher::IS_NOT_NULL);
        registry
    }

    /// Registers a matcher, replacing any matcher with the same identifier.
    pub fn register(&mut self, matcher: impl ValueMatcher + 'static) {
        let matcher: Box<dyn ValueMatcher> = Box::new(matcher);
        if let Some(slot) = self.matchers.iter_mut().find(|m| m.id() == matcher.id()) {
            *slot = matcher;
        } else {
            self.matchers.push(matcher);
        }
    }

    /// Looks up a matcher by identifier.
    #[must_use]
    pub fn get(&self, id: ValueMatcherId) -> Option<&dyn ValueMatcher> {
        self.matchers.iter().find(|m| m.id() == id).map(|m| &**m)
    }

    /// Iterates over the registered matchers.
    pub fn list(&self) -> impl Iterator<Item = &dyn ValueMatcher> {
        self.matchers.iter().map(|m| &**m)
    }

    /// Returns the registered identifiers.
    #[must_use]
    pub fn ids(&self) -> Vec<ValueMatcherId> {
        self.matchers.iter().map(|m| m.id()).collect()
    }

    fn lookup(&self, id: ValueMatcherId) -> ApplicationResult<&dyn ValueMatcher> {
        self.get(id).ok_or(ApplicationError::UnknownMatcher(id))
    }

    /// Validates the options of a matcher configuration.
    ///
    /// # Errors
    /// Returns `ApplicationError::UnknownMatcher` if no matcher is registered
    /// under the configuration's identifier.
    pub fn validate(&self, config: &ValueMatcherConfig) -> ApplicationResult<ValidationState> {
        Ok(self.lookup(config.id)?.validate(&config.options))
    }

    /// Builds the predicate of a matcher configuration.
    ///
    /// # Errors
    /// Returns `ApplicationError::UnknownMatcher` if no matcher is registered
    /// under the configuration's identifier.
    pub fn build_predicate(
        &self,
        config: &ValueMatcherConfig,
        store: &VariableStore,
    ) -> ApplicationResult<ValuePredicate> {
        Ok(self.lookup(config.id)?.build_predicate(&config.options, store))
    }
}
