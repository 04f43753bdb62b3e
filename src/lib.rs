//! catalog-ai - catalog embeddings and RAG chat adapters
//!
//! Two independent adapters used by an e-commerce catalog:
//!
//! - `catalog` - turns catalog items into fixed-size embedding vectors for
//!   semantic search. Embeddings are optional; with no provider configured
//!   every call returns `None`.
//! - `chat` - answers a conversation by forwarding its latest message to a
//!   hosted RAG query service.
//!
//! Supporting modules:
//!
//! - `config` - Configuration management
//! - `embedding` - Embedding providers
//! - `openai` - OpenAI client construction
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_ai::catalog::{CatalogAi, CatalogItem};
//! use catalog_ai::config::Settings;
//! use catalog_ai::embedding::embedder_from_settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let ai = CatalogAi::new(embedder_from_settings(&settings.embedding)?);
//!
//!     let item = CatalogItem::new(1, "Trail Boots", "Waterproof hiking boots");
//!     match ai.get_item_embedding(&item).await? {
//!         Some(vector) => println!("{} dimensions", vector.len()),
//!         None => println!("embeddings disabled"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod chat;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod openai;

pub use error::{CatalogAiError, Result};
