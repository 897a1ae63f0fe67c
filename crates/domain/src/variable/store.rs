//! Variable store snapshot used for one resolution pass.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::template::{TemplateVariable, VariableKind, VariableValue, is_valid_variable_name};
use crate::error::{DomainError, DomainResult};

/// A per-call override, as carried by panel-scoped variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedVar {
    /// Display text of the value.
    #[serde(default)]
    pub text: String,
    /// The value that replaces the variable's current value.
    pub value: VariableValue,
}

impl ScopedVar {
    /// Creates a scoped override whose text is derived from the value.
    #[must_use]
    pub fn new(value: impl Into<VariableValue>) -> Self {
        let value = value.into();
        Self {
            text: value.text(),
            value,
        }
    }
}

/// Scoped overrides keyed by variable name.
///
/// A `BTreeMap` keeps the order in which new names are appended deterministic.
pub type ScopedVars = BTreeMap<String, ScopedVar>;

/// Immutable, ordered snapshot of template variables.
///
/// Lookups are by exact name. The snapshot is built fresh for every
/// resolution call and never mutated by the components that read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    variables: Vec<TemplateVariable>,
}

impl VariableStore {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            variables: Vec::new(),
        }
    }

    /// Builds a snapshot, checking names and uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVariableName` for a name that cannot be
    /// referenced by a token, or `DomainError::DuplicateVariable` when a name
    /// occurs twice.
    pub fn new(variables: Vec<TemplateVariable>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(variables.len());
        for variable in &variables {
            variable.validate()?;
            if !seen.insert(variable.name.as_str()) {
                return Err(DomainError::DuplicateVariable(variable.name.clone()));
            }
        }
        Ok(Self { variables })
    }

    /// Builds a snapshot, skipping variables that [`VariableStore::new`] would
    /// reject. The first variable of a duplicated name wins.
    ///
    /// Returns the snapshot together with one error per skipped variable.
    #[must_use]
    pub fn lenient(variables: Vec<TemplateVariable>) -> (Self, Vec<DomainError>) {
        let mut kept: Vec<TemplateVariable> = Vec::with_capacity(variables.len());
        let mut skipped = Vec::new();

        for variable in variables {
            if let Err(e) = variable.validate() {
                skipped.push(e);
            } else if kept.iter().any(|v| v.name == variable.name) {
                skipped.push(DomainError::DuplicateVariable(variable.name));
            } else {
                kept.push(variable);
            }
        }

        (Self { variables: kept }, skipped)
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TemplateVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Returns true if a variable with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the variables in definition order.
    #[must_use]
    pub fn variables(&self) -> &[TemplateVariable] {
        &self.variables
    }

    /// Returns the variable names in definition order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns a new snapshot with scoped overrides applied.
    ///
    /// A scoped variable replaces the value of the same-named variable in
    /// place, keeping its kind and label. Names unknown to the snapshot are
    /// appended in name order; their kind is `Multi` for list values and
    /// `Single` otherwise. Names that cannot be referenced by a token are
    /// skipped.
    #[must_use]
    pub fn with_scoped(&self, scoped: &ScopedVars) -> Self {
        if scoped.is_empty() {
            return self.clone();
        }

        let mut variables: Vec<TemplateVariable> = self
            .variables
            .iter()
            .map(|variable| match scoped.get(&variable.name) {
                Some(over) => TemplateVariable {
                    current_value: over.value.clone(),
                    ..variable.clone()
                },
                None => variable.clone(),
            })
            .collect();

        for (name, over) in scoped {
            if self.contains(name) || !is_valid_variable_name(name) {
                continue;
            }
            let kind = if over.value.is_list() {
                VariableKind::Multi
            } else {
                VariableKind::Single
            };
            variables.push(TemplateVariable::new(name.clone(), kind, over.value.clone()));
        }

        Self { variables }
    }
}

impl<'a> IntoIterator for &'a VariableStore {
    type Item = &'a TemplateVariable;
    type IntoIter = std::slice::Iter<'a, TemplateVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}
