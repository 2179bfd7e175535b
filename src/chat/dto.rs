use serde::{Deserialize, Serialize};

use super::intent::Intent;
use crate::storage::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
}

/// The stored user message and the bot's answer to it.
#[derive(Debug, Serialize)]
pub struct ChatExchange {
    pub intent: Intent,
    pub user: ChatMessage,
    pub reply: ChatMessage,
}
