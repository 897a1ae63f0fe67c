//! Querybind Domain - Core types
//!
//! This crate defines the domain model for template-variable binding:
//! variables and their snapshots, data-source queries, matcher options and
//! resolver settings. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod matcher;
pub mod query;
pub mod settings;
pub mod variable;

pub use error::{DomainError, DomainResult};
pub use matcher::{
    MatcherOptions, RangeField, RangeOptions, ValidationState, ValueMatcherConfig, ValueMatcherId,
    ValueOptions,
};
pub use query::{DataSourceRef, Query, QueryType, ResolvedQuery};
pub use settings::{DEFAULT_RESULT_FORMAT, ResolverSettings};
pub use variable::{
    ScopedVar, ScopedVars, TemplateVariable, VariableKind, VariableStore, VariableValue,
};
