//! Ask command implementation.

use crate::chat::{ChatCompletion, ChatMessage, RagChatService};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(question: &str, settings: Settings) -> Result<()> {
    let service = RagChatService::from_settings(&settings.rag)?;

    let spinner = Output::spinner("Asking the catalog assistant...");
    let result = service.get_chat_response(&[ChatMessage::user(question)]).await;
    spinner.finish_and_clear();

    match result {
        Ok(reply) => Output::answer(reply.content.as_deref()),
        Err(e) => {
            Output::error(&format!("Failed to get an answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
