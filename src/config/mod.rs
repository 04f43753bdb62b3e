//! Configuration module for catalog-ai.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    EmbeddingSettings, GeneralSettings, RagSettings, Settings, ENDPOINT_VERSION_ENV,
};
