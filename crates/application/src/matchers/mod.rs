//! Value matchers for filter-by-value transforms
//!
//! A matcher validates its options and turns them into a predicate over data
//! cells. Option values may reference template variables; they are resolved
//! against the snapshot given to [`ValueMatcher::build_predicate`].
//!
//! The set of matchers is closed: [`ValueMatcherRegistry::standard`] builds
//! the table of every [`ValueMatcherId`].

mod comparison;
mod editor;
mod null;
mod pattern;
mod range;
mod registry;
mod validators;

use querybind_domain::matcher::{MatcherOptions, ValidationState, ValueMatcherId};
use querybind_domain::variable::VariableStore;
use serde_json::Value;

pub use comparison::{ComparisonMatcher, ComparisonOperator};
pub use editor::{
    INVALID_BOUND_MESSAGE, RANGE_SEPARATOR, RangeEdit, RangeEditorConfig, Suggestion,
    VariableOrigin, edit_range_options, field_placeholder, variable_suggestions,
};
pub use null::NullMatcher;
pub use pattern::RegexMatcher;
pub use range::RangeMatcher;
pub use registry::ValueMatcherRegistry;
pub use validators::{cell_number, cell_text, number_or_variable_validator, parse_number};

/// A boolean membership test over one data cell.
pub type ValuePredicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// A value matcher.
pub trait ValueMatcher: Send + Sync {
    /// Returns the identifier this matcher is registered under.
    fn id(&self) -> ValueMatcherId;

    /// Returns the display name, e.g. `"Is between"`.
    fn name(&self) -> &'static str;

    /// Returns a one-line description.
    fn description(&self) -> &'static str;

    /// Returns the options a new matcher of this kind starts with.
    fn default_options(&self) -> MatcherOptions;

    /// Flags every invalid field of the options.
    ///
    /// Options of the wrong shape flag all fields of this matcher.
    fn validate(&self, options: &MatcherOptions) -> ValidationState;

    /// Builds the predicate for the options.
    ///
    /// Variable references are resolved against `store` once, here. Options
    /// that cannot be interpreted after resolution produce a predicate that
    /// is always false.
    fn build_predicate(&self, options: &MatcherOptions, store: &VariableStore) -> ValuePredicate;
}

/// A predicate that matches nothing.
pub(crate) fn never() -> ValuePredicate {
    Box::new(|_| false)
}
