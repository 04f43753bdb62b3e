//! CLI module for catalog-ai.

pub mod commands;
mod output;

pub use output::{vector_preview, Output};

use clap::{Parser, Subcommand};

/// catalog-ai - catalog embeddings and RAG chat
///
/// Generate semantic-search embeddings for catalog items and ask questions
/// of the hosted RAG service.
#[derive(Parser, Debug)]
#[command(name = "catalog-ai")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// RAG service version (overrides rag.endpoint_version)
    #[arg(long, env = "RAG_ENDPOINT_VERSION", global = true)]
    pub rag_version: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an embedding for a piece of text
    Embed {
        /// Text to embed
        text: String,
    },

    /// Generate embeddings for catalog items read from a JSON file
    EmbedItems {
        /// JSON file containing an array of {id, name, description}
        file: String,

        /// Write results to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Ask a single question of the RAG service
    Ask {
        /// The question to ask
        question: String,
    },

    /// Start an interactive chat session
    Chat,

    /// Check configuration and report which features are available
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write a default configuration file if none exists
    Init,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embed_items() {
        let cli = Cli::try_parse_from(["catalog-ai", "embed-items", "items.json", "-o", "out.json"]).unwrap();
        match cli.command {
            Commands::EmbedItems { file, output } => {
                assert_eq!(file, "items.json");
                assert_eq!(output.as_deref(), Some("out.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["catalog-ai", "ask", "hello", "--rag-version", "v2", "-vv"]).unwrap();
        assert_eq!(cli.rag_version.as_deref(), Some("v2"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Ask { .. }));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
