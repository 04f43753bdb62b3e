//! Embedding providers used by the catalog adapter.

mod openai;

pub use openai::OpenAIEmbedder;

use crate::config::EmbeddingSettings;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Trait for embedding generation.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts, one per input, in input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Name of the model backing this embedder.
    fn model(&self) -> &str;
}

/// Whether embeddings can be produced with a given configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingStatus {
    Enabled,
    Disabled(String),
}

impl EmbeddingStatus {
    /// Resolve the status from settings and credential availability.
    pub fn resolve(settings: &EmbeddingSettings, has_api_key: bool) -> Self {
        if !settings.enabled {
            return Self::Disabled("embedding.enabled is false".to_string());
        }

        match settings.provider.to_lowercase().as_str() {
            "none" | "" => Self::Disabled("no embedding provider configured".to_string()),
            "openai" if has_api_key => Self::Enabled,
            "openai" => Self::Disabled(format!(
                "{} is not set",
                crate::openai::API_KEY_ENV
            )),
            other => Self::Disabled(format!("unknown embedding provider: {}", other)),
        }
    }
}

/// Build the configured embedder, or None when embeddings are turned off.
///
/// A missing provider is a supported configuration; callers degrade to
/// "no embedding" instead of failing.
pub fn embedder_from_settings(settings: &EmbeddingSettings) -> Result<Option<Arc<dyn Embedder>>> {
    match EmbeddingStatus::resolve(settings, crate::openai::has_api_key()) {
        EmbeddingStatus::Enabled => {
            debug!(model = %settings.model, "Embedding provider enabled");
            let embedder = OpenAIEmbedder::with_config(&settings.model, settings.dimensions)?;
            Ok(Some(Arc::new(embedder)))
        }
        EmbeddingStatus::Disabled(reason) => {
            warn!("Catalog embeddings disabled: {}", reason);
            Ok(None)
        }
    }
}
