//! Chat request body parsing.
//!
//! The body must be a JSON object with a `messages` array. Entries that are
//! not valid messages keep their position as empty messages with no role, so
//! the last entry and the context window always follow the raw array.

use serde::Deserialize;
use tracing::debug;

use crate::error::ChatError;
use crate::types::Message;

#[derive(Debug, Deserialize)]
struct ChatRequest {
    messages: Vec<serde_json::Value>,
}

/// Parse a raw chat request body into the transcript it carries.
pub fn parse_transcript(body: &[u8]) -> Result<Vec<Message>, ChatError> {
    let request: ChatRequest =
        serde_json::from_slice(body).map_err(|e| ChatError::InvalidTranscript(e.to_string()))?;

    let mut malformed = 0usize;
    let messages: Vec<Message> = request
        .messages
        .into_iter()
        .map(|entry| {
            serde_json::from_value(entry).unwrap_or_else(|_| {
                malformed += 1;
                Message::default()
            })
        })
        .collect();

    if malformed > 0 {
        debug!(
            malformed,
            total = messages.len(),
            "Blanked malformed transcript entries"
        );
    }

    Ok(messages)
}
