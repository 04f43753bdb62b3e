//! Chat completion over the hosted RAG query endpoint.

use super::{ChatCompletion, ChatMessage, ChatStream, RagEndpoint};
use crate::config::RagSettings;
use crate::error::{CatalogAiError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};

#[derive(Serialize)]
struct QueryRequest<'a> {
    question: &'a str,
}

/// Chat service that forwards the latest message to the RAG endpoint.
///
/// The service is request/response only. Earlier turns are not sent, and
/// streaming is not available.
#[derive(Debug, Clone)]
pub struct RagChatService {
    client: reqwest::Client,
    endpoint: RagEndpoint,
}

impl RagChatService {
    /// Create a service using an existing HTTP client.
    pub fn new(client: reqwest::Client, endpoint: RagEndpoint) -> Self {
        Self { client, endpoint }
    }

    /// Create a service from settings, with the configured request timeout.
    pub fn from_settings(settings: &RagSettings) -> Result<Self> {
        let endpoint = RagEndpoint::from_settings(settings)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self::new(client, endpoint))
    }

    pub fn endpoint(&self) -> &RagEndpoint {
        &self.endpoint
    }
}

/// Pull the `answer` field out of a query response.
///
/// Strings are taken verbatim; any other non-null value is kept as JSON text.
fn extract_answer(body: &Value) -> Option<String> {
    match body.get("answer")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl ChatCompletion for RagChatService {
    #[instrument(skip(self, history), fields(turns = history.len()))]
    async fn get_chat_response(&self, history: &[ChatMessage]) -> Result<ChatMessage> {
        let last = history
            .last()
            .ok_or_else(|| CatalogAiError::InvalidInput("chat history is empty".to_string()))?;
        let question = last.content.as_deref().unwrap_or_default();

        info!("Forwarding question to RAG service");
        debug!(url = %self.endpoint, "POST query");

        let response = self
            .client
            .post(self.endpoint.url().clone())
            .json(&QueryRequest { question })
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        let answer = extract_answer(&body);
        debug!(has_answer = answer.is_some(), "RAG service responded");

        Ok(ChatMessage::assistant(answer))
    }

    async fn get_streaming_chat_response(&self, _history: &[ChatMessage]) -> Result<ChatStream> {
        Err(CatalogAiError::Unsupported("Streaming not supported".to_string()))
    }
}
