//! Template variables and the snapshot they are resolved against

mod store;
mod template;

pub use store::{ScopedVar, ScopedVars, VariableStore};
pub use template::{TemplateVariable, VariableKind, VariableValue, is_valid_variable_name};
