//! Querybind Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: file-backed variable and query
//! repositories, the settings file and document serialization.

pub mod persistence;
pub mod serialization;

pub use persistence::{
    FileQueryRepository, FileVariableRepository, SettingsError, SettingsRepository,
    TokioFileSystem,
};
pub use serialization::{
    DocumentFormat, SerializationError, from_json_bytes, from_yaml_bytes, to_json_stable,
    to_json_stable_bytes,
};
