//! Configuration settings for catalog-ai.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub embedding: EmbeddingSettings,
    pub rag: RagSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Embedding generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Master switch for catalog embeddings.
    pub enabled: bool,
    /// Embedding provider (openai, none).
    pub provider: String,
    /// Embedding model to use.
    pub model: String,
    /// Dimensions requested from the provider. None uses the model's native size.
    pub dimensions: Option<u32>,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "openai".to_string(),
            model: "text-embedding-3-small".to_string(),
            dimensions: None,
        }
    }
}

/// Deployment setting that selects the RAG service version.
pub const ENDPOINT_VERSION_ENV: &str = "JohnEndpointVersion";

/// Settings for the hosted RAG query service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RagSettings {
    /// Service version used in the endpoint host (defaults to "v1" when unset).
    #[serde(alias = "JohnEndpointVersion")]
    pub endpoint_version: Option<String>,
    /// Host suffix the versioned service lives under.
    pub host: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            endpoint_version: None,
            host: "thankfulforest-d25f7acc.westus3.azurecontainerapps.io".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&Path>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// `JohnEndpointVersion` replaces `rag.endpoint_version` when non-blank.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(version) = lookup(ENDPOINT_VERSION_ENV).filter(|v| !v.trim().is_empty()) {
            self.rag.endpoint_version = Some(version);
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::CatalogAiError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("catalog-ai")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.embedding.enabled);
        assert_eq!(settings.embedding.provider, "openai");
        assert!(settings.embedding.dimensions.is_none());
        assert!(settings.rag.endpoint_version.is_none());
        assert_eq!(settings.rag.timeout_secs, 120);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let settings = Settings::load_from(Some(path.as_path())).unwrap();
        assert_eq!(settings.embedding.model, "text-embedding-3-small");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[rag]\nendpoint_version = \"v2\"\n\n[embedding]\nenabled = false\n",
        )
        .unwrap();

        let settings = Settings::load_from(Some(path.as_path())).unwrap();
        assert_eq!(settings.rag.endpoint_version.as_deref(), Some("v2"));
        assert!(!settings.embedding.enabled);
        assert_eq!(settings.embedding.provider, "openai");
        assert_eq!(settings.general.log_level, "warn");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.embedding.dimensions = Some(512);
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded.embedding.dimensions, Some(512));
    }

    #[test]
    fn test_endpoint_version_env_selects_service() {
        let mut settings = Settings::default();
        settings.apply_env_with(|key| (key == "JohnEndpointVersion").then(|| "v2".to_string()));

        assert_eq!(settings.rag.endpoint_version.as_deref(), Some("v2"));
        let endpoint = crate::chat::RagEndpoint::from_settings(&settings.rag).unwrap();
        assert!(endpoint.to_string().contains("rag-v2-service"));
    }

    #[test]
    fn test_endpoint_version_env_absent_or_blank_keeps_file_value() {
        let mut settings = Settings::default();
        settings.rag.endpoint_version = Some("v3".to_string());

        settings.apply_env_with(|_| None);
        assert_eq!(settings.rag.endpoint_version.as_deref(), Some("v3"));

        settings.apply_env_with(|_| Some("  ".to_string()));
        assert_eq!(settings.rag.endpoint_version.as_deref(), Some("v3"));
    }

    #[test]
    fn test_endpoint_version_file_key_alias() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rag]\nJohnEndpointVersion = \"v2\"\n").unwrap();

        let settings = Settings::load_from(Some(path.as_path())).unwrap();
        assert_eq!(settings.rag.endpoint_version.as_deref(), Some("v2"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[embedding\nenabled = ").unwrap();

        assert!(matches!(
            Settings::load_from(Some(path.as_path())),
            Err(crate::error::CatalogAiError::TomlParse(_))
        ));
    }
}
