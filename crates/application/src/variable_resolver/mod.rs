//! Variable resolution module
//!
//! Provides parsing and resolution of `$name`, `${name}` and `[[name]]`
//! placeholders in strings.
//!
//! # Usage
//!
//! ```
//! use querybind_application::variable_resolver::{Interpolator, VariableFormat};
//! use querybind_domain::variable::{TemplateVariable, VariableStore};
//!
//! let store = VariableStore::new(vec![
//!     TemplateVariable::single("var1", "var1-foo"),
//!     TemplateVariable::multi("var3", ["var3-foo", "var3-baz"]),
//! ])
//! .unwrap();
//!
//! let interpolator = Interpolator::new(&store);
//! assert_eq!(
//!     interpolator.resolve("where $__contains(name, $var3)", VariableFormat::Scalar),
//!     "where $__contains(name, 'var3-foo','var3-baz')"
//! );
//! ```

pub mod engine;
pub mod parser;

pub use engine::{Interpolator, ResolutionResult, VariableFormat, format_value};
pub use parser::{
    TokenSyntax, VariableReference, extract_variable_names, is_variable_token, parse_variables,
};
