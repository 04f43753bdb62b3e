//! Catalog items and the embedding adapter that indexes them.

pub mod ai;

pub use ai::{CatalogAi, EmbeddingVector, EMBEDDING_DIMENSIONS};

use serde::{Deserialize, Serialize};

/// The fields of a catalog item that feed semantic search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog item ID.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl CatalogItem {
    /// Create a new catalog item.
    pub fn new(id: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Text sent to the embedding provider for this item.
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_text() {
        let item = CatalogItem::new(1, "Trail Boots", "Waterproof leather hiking boots");
        assert_eq!(item.embedding_text(), "Trail Boots Waterproof leather hiking boots");
    }

    #[test]
    fn test_embedding_text_empty_description() {
        let item = CatalogItem::new(2, "Socks", "");
        assert_eq!(item.embedding_text(), "Socks ");
    }

    #[test]
    fn test_deserialize_without_description() {
        let item: CatalogItem = serde_json::from_str(r#"{"id": 3, "name": "Tent"}"#).unwrap();
        assert_eq!(item.description, "");
    }
}
