//! CLI output formatting utilities.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        eprintln!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        eprintln!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print an assistant reply.
    pub fn answer(content: Option<&str>) {
        match content {
            Some(text) => println!("\n{}\n", text),
            None => println!("\n{}\n", style("(no answer)").dim()),
        }
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Short preview of a vector for human-readable output.
pub fn vector_preview(values: &[f32], shown: usize) -> String {
    let head: Vec<String> = values.iter().take(shown).map(|v| format!("{:.4}", v)).collect();
    if values.len() > shown {
        format!("[{}, ...] ({} dims)", head.join(", "), values.len())
    } else {
        format!("[{}] ({} dims)", head.join(", "), values.len())
    }
}
