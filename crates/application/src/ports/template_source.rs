//! Template source port
//!
//! The owner of the dashboard's template variables. The core never holds on
//! to it: each resolution pass takes a snapshot and drops it afterwards.

use querybind_domain::variable::{ScopedVars, TemplateVariable, VariableStore};
use tracing::warn;

use crate::variable_resolver::{Interpolator, VariableFormat};

/// Provides the current template variables.
pub trait TemplateSource: Send + Sync {
    /// Returns the current variables, in display order.
    fn variables(&self) -> Vec<TemplateVariable>;

    /// Builds a snapshot of the current variables with `scoped` merged over it.
    ///
    /// Variables with an invalid or repeated name are skipped with a warning;
    /// building a snapshot never fails.
    fn snapshot(&self, scoped: &ScopedVars) -> VariableStore {
        let (store, rejected) = VariableStore::lenient(self.variables());
        for error in &rejected {
            warn!(error = %error, "skipping template variable");
        }
        if scoped.is_empty() {
            store
        } else {
            store.with_scoped(scoped)
        }
    }

    /// Resolves the placeholders of one string.
    fn replace(&self, text: &str, scoped: &ScopedVars, format: VariableFormat) -> String {
        let store = self.snapshot(scoped);
        Interpolator::new(&store).resolve(text, format)
    }
}

impl TemplateSource for VariableStore {
    fn variables(&self) -> Vec<TemplateVariable> {
        self.variables().to_vec()
    }
}
