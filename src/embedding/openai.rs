//! OpenAI embeddings implementation.

use super::Embedder;
use crate::error::{CatalogAiError, Result};
use crate::openai::create_client;
use async_openai::types::{CreateEmbeddingRequestArgs, EmbeddingInput};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Maximum number of inputs sent in a single embeddings request.
const BATCH_SIZE: usize = 100;

/// OpenAI-based embedder.
pub struct OpenAIEmbedder {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    dimensions: Option<u32>,
}

impl OpenAIEmbedder {
    /// Create a new OpenAI embedder with the default model at its native size.
    pub fn new() -> Result<Self> {
        Self::with_config("text-embedding-3-small", None)
    }

    /// Create a new OpenAI embedder with a custom model and requested dimensions.
    pub fn with_config(model: &str, dimensions: Option<u32>) -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            model: model.to_string(),
            dimensions,
        })
    }

    /// Dimensions requested from the API, if any.
    pub fn dimensions(&self) -> Option<u32> {
        self.dimensions
    }

    async fn request(&self, input: Vec<String>) -> Result<Vec<Vec<f32>>> {
        let mut args = CreateEmbeddingRequestArgs::default();
        args.model(&self.model).input(EmbeddingInput::StringArray(input));
        if let Some(dimensions) = self.dimensions {
            args.dimensions(dimensions);
        }
        let request = args
            .build()
            .map_err(|e| CatalogAiError::Embedding(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(|e| CatalogAiError::OpenAI(format!("Embedding API error: {}", e)))?;

        // The API does not promise response order
        let mut data = response.data;
        data.sort_by_key(|e| e.index);

        Ok(data.into_iter().map(|e| e.embedding).collect())
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    #[instrument(skip(self, text))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.request(vec![text.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CatalogAiError::Embedding("Empty embedding response".to_string()))
    }

    #[instrument(skip(self, texts), fields(count = texts.len()))]
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Generating embeddings for {} texts", texts.len());

        let mut all_embeddings = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(BATCH_SIZE) {
            all_embeddings.extend(self.request(chunk.to_vec()).await?);
        }

        debug!("Generated {} embeddings", all_embeddings.len());
        Ok(all_embeddings)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
