//! File-backed adapters for the application ports.

mod file_system;
mod query_repository;
mod settings_repository;
mod variable_repository;

pub use file_system::TokioFileSystem;
pub use query_repository::FileQueryRepository;
pub use settings_repository::{SettingsError, SettingsRepository};
pub use variable_repository::FileVariableRepository;
