//! URL construction for the hosted RAG query service.

use crate::config::RagSettings;
use crate::error::{CatalogAiError, Result};
use url::Url;

/// Version used when none is configured.
pub const DEFAULT_VERSION: &str = "v1";

/// Resolved location of the RAG query endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RagEndpoint {
    url: Url,
}

impl RagEndpoint {
    /// Build `https://rag-{version}-service.{host}/query`.
    ///
    /// A missing or blank version falls back to [`DEFAULT_VERSION`].
    pub fn new(version: Option<&str>, host: &str) -> Result<Self> {
        let version = version
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VERSION);
        let host = host.trim().trim_matches('.');
        if host.is_empty() {
            return Err(CatalogAiError::Config("rag.host is empty".to_string()));
        }

        let url = Url::parse(&format!("https://rag-{}-service.{}/query", version, host))?;
        if url.host_str().is_none() {
            return Err(CatalogAiError::Config(format!("invalid RAG endpoint: {}", url)));
        }

        Ok(Self { url })
    }

    /// Build the endpoint from settings.
    pub fn from_settings(settings: &RagSettings) -> Result<Self> {
        Self::new(settings.endpoint_version.as_deref(), &settings.host)
    }

    /// Point at an arbitrary URL.
    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl std::fmt::Display for RagEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
