//! Embed and embed-items command implementations.

use crate::catalog::{CatalogAi, CatalogItem, EmbeddingVector};
use crate::cli::{vector_preview, Output};
use crate::config::Settings;
use crate::embedding::embedder_from_settings;
use anyhow::{Context, Result};
use serde::Serialize;

/// One line of embed-items output.
#[derive(Serialize)]
struct ItemEmbedding {
    id: i32,
    embedding: EmbeddingVector,
}

fn catalog_ai(settings: &Settings) -> Result<CatalogAi> {
    Ok(CatalogAi::new(embedder_from_settings(&settings.embedding)?))
}

/// Run the embed command.
pub async fn run_embed(text: &str, settings: Settings) -> Result<()> {
    let ai = catalog_ai(&settings)?;
    if !ai.is_enabled() {
        Output::warning("Embeddings are disabled. Run 'catalog-ai doctor' for details.");
    }

    let spinner = Output::spinner("Generating embedding...");
    let result = ai.get_embedding(text).await;
    spinner.finish_and_clear();

    let vector = result?;
    if let Some(v) = &vector {
        Output::success(&vector_preview(v.as_slice(), 4));
    }
    println!("{}", serde_json::to_string(&vector)?);

    Ok(())
}

/// Run the embed-items command.
pub async fn run_embed_items(file: &str, output: Option<&str>, settings: Settings) -> Result<()> {
    let path = Settings::expand_path(file);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let items: Vec<CatalogItem> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of catalog items", path.display()))?;

    let ai = catalog_ai(&settings)?;
    if !ai.is_enabled() {
        Output::warning("Embeddings are disabled. Run 'catalog-ai doctor' for details.");
    }

    let spinner = Output::spinner(&format!("Embedding {} catalog items...", items.len()));
    let result = ai.get_embeddings(&items).await;
    spinner.finish_and_clear();

    let embeddings = result?.map(|vectors| pair_with_ids(&items, vectors));
    let json = serde_json::to_string_pretty(&embeddings)?;

    match output {
        Some(out) => {
            let out_path = Settings::expand_path(out);
            std::fs::write(&out_path, json)?;
            Output::success(&format!("Wrote embeddings to {}", out_path.display()));
        }
        None => println!("{}", json),
    }

    if let Some(embeddings) = &embeddings {
        Output::success(&format!("Embedded {} items", embeddings.len()));
    }

    Ok(())
}

fn pair_with_ids(items: &[CatalogItem], vectors: Vec<EmbeddingVector>) -> Vec<ItemEmbedding> {
    items
        .iter()
        .zip(vectors)
        .map(|(item, embedding)| ItemEmbedding {
            id: item.id,
            embedding,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embed_items_disabled_writes_null() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("items.json");
        let out = dir.path().join("out.json");
        std::fs::write(&input, r#"[{"id": 1, "name": "Tent", "description": "Two person"}]"#).unwrap();

        let mut settings = Settings::default();
        settings.embedding.enabled = false;

        run_embed_items(
            input.to_str().unwrap(),
            Some(out.to_str().unwrap()),
            settings,
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "null");
    }

    #[tokio::test]
    async fn test_embed_items_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("items.json");
        std::fs::write(&input, r#"{"id": 1}"#).unwrap();

        let mut settings = Settings::default();
        settings.embedding.enabled = false;

        assert!(run_embed_items(input.to_str().unwrap(), None, settings)
            .await
            .is_err());
    }
}
