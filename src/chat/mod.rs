//! Chat completion backed by a hosted RAG query service.

pub mod endpoint;
mod rag;

pub use endpoint::RagEndpoint;
pub use rag::RagChatService;

use crate::error::Result;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single turn in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    /// Message text. Absent when the backend had nothing to say.
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn new(role: Role, content: Option<String>) -> Self {
        Self { role, content }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, Some(content.into()))
    }

    pub fn assistant(content: Option<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Incremental chat output.
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Trait for services that answer a conversation.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Produce one assistant message for the conversation so far.
    async fn get_chat_response(&self, history: &[ChatMessage]) -> Result<ChatMessage>;

    /// Produce the assistant reply as a stream of text fragments.
    async fn get_streaming_chat_response(&self, history: &[ChatMessage]) -> Result<ChatStream>;
}
