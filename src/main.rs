//! catalog-ai CLI entry point.

use anyhow::Result;
use catalog_ai::cli::{commands, Cli, Commands};
use catalog_ai::config::Settings;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.as_deref().map(Settings::expand_path);
    let mut settings = Settings::load_from(config_path.as_deref())?;
    settings.apply_env();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("catalog_ai={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    if let Some(version) = &cli.rag_version {
        settings.rag.endpoint_version = Some(version.clone());
    }

    // Execute command
    match &cli.command {
        Commands::Embed { text } => {
            commands::run_embed(text, settings).await?;
        }

        Commands::EmbedItems { file, output } => {
            commands::run_embed_items(file, output.as_deref(), settings).await?;
        }

        Commands::Ask { question } => {
            commands::run_ask(question, settings).await?;
        }

        Commands::Chat => {
            commands::run_chat(settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings, config_path.as_deref())?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings, config_path.as_deref())?;
        }
    }

    Ok(())
}
