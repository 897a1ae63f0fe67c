//! Querybind Application - Binding, matchers, use cases and ports
//!
//! This crate defines the application layer with:
//! - Placeholder interpolation and query binding
//! - Value matchers for filter-by-value transforms
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration
//! - Application-level error handling

pub mod binding;
pub mod error;
pub mod matchers;
pub mod ports;
pub mod use_cases;
pub mod variable_resolver;

pub use binding::QueryBinder;
pub use error::{ApplicationError, ApplicationResult};
pub use matchers::{ValueMatcher, ValueMatcherRegistry, ValuePredicate};
pub use ports::TemplateSource;
pub use use_cases::{InterpolateQueries, ResolveQueryFile, ResolveQueryFileInput, ResolveQueryFileOutput};
pub use variable_resolver::{Interpolator, VariableFormat};
