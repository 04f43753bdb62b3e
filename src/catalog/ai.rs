//! Catalog embedding adapter.
//!
//! Wraps an optional [`Embedder`] and pins every vector it hands out to
//! [`EMBEDDING_DIMENSIONS`] so the stored index schema does not follow
//! provider upgrades. With no embedder configured every operation returns
//! `None` rather than an error.

use super::CatalogItem;
use crate::embedding::Embedder;
use crate::error::{CatalogAiError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Dimensionality of every vector produced for the catalog index.
pub const EMBEDDING_DIMENSIONS: usize = 384;

/// A catalog embedding of exactly [`EMBEDDING_DIMENSIONS`] components.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmbeddingVector(Vec<f32>);

impl EmbeddingVector {
    /// Keep the first [`EMBEDDING_DIMENSIONS`] components of a provider vector.
    fn truncate(mut raw: Vec<f32>) -> Result<Self> {
        if raw.len() < EMBEDDING_DIMENSIONS {
            return Err(CatalogAiError::Embedding(format!(
                "provider returned {} dimensions, expected at least {}",
                raw.len(),
                EMBEDDING_DIMENSIONS
            )));
        }
        raw.truncate(EMBEDDING_DIMENSIONS);
        Ok(Self(raw))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

/// Embedding adapter for catalog items.
#[derive(Clone, Default)]
pub struct CatalogAi {
    embedder: Option<Arc<dyn Embedder>>,
}

impl CatalogAi {
    /// Create an adapter. Passing `None` disables embeddings for its lifetime.
    pub fn new(embedder: Option<Arc<dyn Embedder>>) -> Self {
        Self { embedder }
    }

    /// Create an adapter with embeddings turned off.
    pub fn disabled() -> Self {
        Self { embedder: None }
    }

    /// Whether an embedding provider is configured.
    pub fn is_enabled(&self) -> bool {
        self.embedder.is_some()
    }

    /// Get an embedding vector for the specified text.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub async fn get_embedding(&self, text: &str) -> Result<Option<EmbeddingVector>> {
        let Some(embedder) = &self.embedder else {
            return Ok(None);
        };

        let raw = embedder.embed(text).await?;
        debug!(model = embedder.model(), dims = raw.len(), "Received embedding");
        EmbeddingVector::truncate(raw).map(Some)
    }

    /// Get an embedding vector for the specified catalog item.
    pub async fn get_item_embedding(&self, item: &CatalogItem) -> Result<Option<EmbeddingVector>> {
        if !self.is_enabled() {
            return Ok(None);
        }
        self.get_embedding(&item.embedding_text()).await
    }

    /// Get embedding vectors for the specified catalog items in one provider call.
    ///
    /// Returns `None` when disabled, even for an empty slice; `Some(vec![])`
    /// only ever means an enabled call with no items. The result is
    /// all-or-nothing and `result[i]` belongs to `items[i]`.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn get_embeddings(&self, items: &[CatalogItem]) -> Result<Option<Vec<EmbeddingVector>>> {
        let Some(embedder) = &self.embedder else {
            return Ok(None);
        };

        let texts: Vec<String> = items.iter().map(CatalogItem::embedding_text).collect();
        let raw = embedder.embed_batch(&texts).await?;

        if raw.len() != items.len() {
            return Err(CatalogAiError::Embedding(format!(
                "provider returned {} embeddings for {} items",
                raw.len(),
                items.len()
            )));
        }

        let vectors = raw
            .into_iter()
            .map(EmbeddingVector::truncate)
            .collect::<Result<Vec<_>>>()?;

        debug!("Embedded {} catalog items", vectors.len());
        Ok(Some(vectors))
    }
}
