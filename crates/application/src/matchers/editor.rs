//! Editing policy of the range matcher options.
//!
//! The option editor keeps two pieces of state: the committed options and the
//! per-bound invalid flags. Each keystroke recomputes the flag of the edited
//! bound; the committed options only move when that bound is valid, so the
//! last valid configuration survives an invalid edit.

use querybind_domain::matcher::{RangeField, RangeOptions, ValidationState};
use querybind_domain::variable::VariableStore;
use serde::{Deserialize, Serialize};

use super::validators::number_or_variable_validator;

/// Error shown next to an invalid bound.
pub const INVALID_BOUND_MESSAGE: &str = "Value needs to be an integer or a variable";

/// Label rendered between the two bound inputs.
pub const RANGE_SEPARATOR: &str = "and";

/// Returns the input placeholder of a bound.
#[must_use]
pub const fn field_placeholder(field: RangeField) -> &'static str {
    match field {
        RangeField::From => "From",
        RangeField::To => "To",
    }
}

/// Configuration of a range option editor.
#[derive(Debug, Clone, Copy)]
pub struct RangeEditorConfig {
    /// Decides whether a bound is acceptable.
    pub validator: fn(&str) -> bool,
}

impl Default for RangeEditorConfig {
    fn default() -> Self {
        Self {
            validator: number_or_variable_validator,
        }
    }
}

/// Outcome of editing one bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEdit {
    /// Flags after the edit.
    pub validation: ValidationState,
    /// New options to commit, `None` when the edit was rejected.
    pub committed: Option<RangeOptions>,
}

impl RangeEditorConfig {
    /// Flags both bounds of freshly loaded options.
    #[must_use]
    pub fn initial_validation(&self, options: &RangeOptions) -> ValidationState {
        ValidationState::Range {
            from: !(self.validator)(&options.from),
            to: !(self.validator)(&options.to),
        }
    }

    /// Applies an edit of one bound.
    #[must_use]
    pub fn edit(
        &self,
        options: &RangeOptions,
        validation: ValidationState,
        field: RangeField,
        input: &str,
    ) -> RangeEdit {
        let invalid = !(self.validator)(input);
        RangeEdit {
            validation: validation.with_range_flag(field, invalid),
            committed: (!invalid).then(|| options.with(field, input)),
        }
    }
}

/// Applies an edit of one bound with the number-or-variable validator.
///
/// # Examples
///
/// ```
/// use querybind_application::matchers::edit_range_options;
/// use querybind_domain::matcher::{RangeField, RangeOptions, ValidationState};
///
/// let options = RangeOptions::new("0", "10");
/// let valid = ValidationState::Range { from: false, to: false };
///
/// let edit = edit_range_options(&options, valid, RangeField::To, "abc");
/// assert!(edit.validation.is_invalid(RangeField::To));
/// assert!(edit.committed.is_none());
/// ```
#[must_use]
pub fn edit_range_options(
    options: &RangeOptions,
    validation: ValidationState,
    field: RangeField,
    input: &str,
) -> RangeEdit {
    RangeEditorConfig::default().edit(options, validation, field, input)
}

/// Where a suggestion comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableOrigin {
    /// A template variable of the current snapshot.
    Template,
}

/// An entry of the bound input's suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Variable name.
    pub value: String,
    /// Variable label, or the name when unlabelled.
    pub label: String,
    /// Source of the suggestion.
    pub origin: VariableOrigin,
}

/// Lists the variables of a snapshot as editor suggestions, in snapshot order.
#[must_use]
pub fn variable_suggestions(store: &VariableStore) -> Vec<Suggestion> {
    store
        .variables()
        .iter()
        .map(|variable| Suggestion {
            value: variable.name.clone(),
            label: variable.display_label().to_string(),
            origin: VariableOrigin::Template,
        })
        .collect()
}
