//! Resolver settings persistence.
//!
//! Settings live in a single JSON file chosen by the caller. Every field is
//! optional; a missing file means default settings.

use std::path::PathBuf;

use querybind_domain::settings::ResolverSettings;
use tokio::fs;
use tracing::debug;

use crate::serialization::{SerializationError, from_json_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Repository for resolver settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    /// Creates a settings repository for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ResolverSettings, SettingsError> {
        if !fs::try_exists(&self.path).await? {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(ResolverSettings::default());
        }

        let content = fs::read(&self.path).await?;
        let settings = from_json_bytes(&content)?;
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use querybind_domain::query::{DataSourceRef, QueryType};
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let temp = TempDir::new().unwrap();
        let repo = SettingsRepository::new(temp.path().join("settings.json"));

        assert_eq!(repo.load().await.unwrap(), ResolverSettings::default());
    }

    #[tokio::test]
    async fn partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        tokio::fs::write(&path, r#"{"default_result_format": "objects"}"#).await.unwrap();

        let settings = SettingsRepository::new(&path).load().await.unwrap();
        assert_eq!(settings.default_result_format, "objects");
        assert_eq!(settings.interpolable_query_types, vec![QueryType::AzureResourceGraph]);
    }

    #[tokio::test]
    async fn full_file_loads_datasource() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        tokio::fs::write(
            &path,
            r#"{"datasource": {"type": "grafana-azure-monitor-datasource", "uid": "azure"}}"#,
        )
        .await
        .unwrap();

        let settings = SettingsRepository::new(&path).load().await.unwrap();
        assert_eq!(
            settings,
            ResolverSettings::default()
                .with_datasource(DataSourceRef::new("grafana-azure-monitor-datasource", "azure"))
        );
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let result = SettingsRepository::new(&path).load().await;
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }
}
