use std::sync::Arc;
use tracing::debug;
use crate::errors::UpstreamError;
use crate::models::chat_completion::ChatMessage;
use crate::repositories::CompletionClient;

const SYSTEM_PROMPT: &str = "You are a helpful assistant that helps find meeting spots between \
    two addresses. The address has to be highly rated, and the location has to be convenient \
    for both parties.";

/// Asks the language model for meeting spot candidates, one "Name, Address" per line
pub struct SuggestionGenerator {
    client: Arc<dyn CompletionClient>,
}

impl SuggestionGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate_suggestions(
        &self,
        purpose: &str,
        address_a: &str,
        address_b: &str,
    ) -> Result<Vec<String>, UpstreamError> {
        let messages = build_messages(purpose, address_a, address_b);
        let reply = self.client.complete(&messages).await?;
        debug!("Language model replied with: {:?}", reply);

        Ok(parse_suggestions(&reply))
    }
}

pub fn build_messages(purpose: &str, address_a: &str, address_b: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!(
            "Find the best four spots for {} between {} and {}. The address has to be valid, \
            ensure it is a real business. Each name and address pair (one line) has to be ended \
            with a new line. No numbering.",
            purpose, address_a, address_b
        )),
    ]
}

/// One candidate per non-blank line, with any list decoration the model added anyway removed.
/// How many lines come back, and whether they look like "Name, Address", is left to the
/// place lookup to judge.
pub fn parse_suggestions(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}

fn clean_line(line: &str) -> String {
    strip_list_marker(line.trim())
        .replace("**", "")
        .trim()
        .to_string()
}

fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix(|c: char| matches!(c, '-' | '*' | '•')) {
        // "**Name**" is emphasis, not a bullet
        if !rest.starts_with('*') {
            return rest.trim_start();
        }
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        // "1.618 Cafe" is a name, "1. Cafe" is a list item
        if let Some(rest) = line[digits..].strip_prefix(|c: char| c == '.' || c == ')') {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }

    line
}
