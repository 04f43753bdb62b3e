//! Doctor command - report configuration and feature availability.

use crate::catalog::EMBEDDING_DIMENSIONS;
use crate::chat::RagEndpoint;
use crate::cli::Output;
use crate::config::Settings;
use crate::embedding::EmbeddingStatus;
use console::style;
use std::path::Path;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings, config_path: Option<&Path>) -> anyhow::Result<()> {
    Output::header("catalog-ai Doctor");
    println!();

    let checks = vec![
        check_config_file(config_path),
        check_embeddings(settings, crate::openai::has_api_key()),
        check_rag_endpoint(settings),
    ];

    for check in &checks {
        check.print();
    }
    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!("{} error(s), {} warning(s)", errors, warnings));
        anyhow::bail!("{} doctor check(s) failed", errors);
    } else if warnings > 0 {
        Output::warning(&format!("{} warning(s); everything else is ready", warnings));
    } else {
        Output::success("All checks passed");
    }

    Ok(())
}

fn check_config_file(config_path: Option<&Path>) -> CheckResult {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Settings::default_config_path);

    if path.exists() {
        CheckResult::ok("Config", &path.display().to_string())
    } else {
        CheckResult::warning(
            "Config",
            &format!("{} not found, using defaults", path.display()),
            "Create one with: catalog-ai config init",
        )
    }
}

fn check_embeddings(settings: &Settings, has_api_key: bool) -> CheckResult {
    match EmbeddingStatus::resolve(&settings.embedding, has_api_key) {
        EmbeddingStatus::Enabled => CheckResult::ok(
            "Embeddings",
            &format!(
                "{} via {}, truncated to {} dims",
                settings.embedding.model, settings.embedding.provider, EMBEDDING_DIMENSIONS
            ),
        ),
        EmbeddingStatus::Disabled(reason) => CheckResult::warning(
            "Embeddings",
            &format!("disabled ({})", reason),
            "Catalog items will be stored without embeddings",
        ),
    }
}

fn check_rag_endpoint(settings: &Settings) -> CheckResult {
    match RagEndpoint::from_settings(&settings.rag) {
        Ok(endpoint) => CheckResult::ok("RAG endpoint", &endpoint.to_string()),
        Err(e) => CheckResult::error(
            "RAG endpoint",
            &e.to_string(),
            &format!(
                "Check rag.host and rag.endpoint_version (or {}) in the config file",
                crate::config::ENDPOINT_VERSION_ENV
            ),
        ),
    }
}
