//! Interactive chat command.

use crate::chat::{ChatCompletion, ChatMessage, RagChatService};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::Result;
use console::style;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the interactive chat command.
pub async fn run_chat(settings: Settings) -> Result<()> {
    let service = RagChatService::from_settings(&settings.rag)?;
    let mut history: Vec<ChatMessage> = Vec::new();

    println!("\n{}", style("Catalog Chat").bold().cyan());
    println!(
        "{}\n",
        style("Type your questions, or 'exit' to quit. Use 'clear' to reset conversation.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("clear") {
            history.clear();
            Output::info("Conversation cleared.");
            continue;
        }

        history.push(ChatMessage::user(input));
        debug!(turns = history.len(), "Sending chat turn");

        let spinner = Output::spinner("Thinking...");
        let result = service.get_chat_response(&history).await;
        spinner.finish_and_clear();

        match result {
            Ok(reply) => {
                print!("{}", style("Assistant:").cyan().bold());
                Output::answer(reply.content.as_deref());
                history.push(reply);
            }
            Err(e) => {
                // Drop the unanswered turn so the next one starts clean
                history.pop();
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}
