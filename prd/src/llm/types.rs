//! Request and response types for the completion API

use serde::Serialize;
use tracing::debug;

/// One chat message
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// A user-role message
    pub fn user(content: impl Into<String>) -> Self {
        debug!("Message::user: called");
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A one-shot completion request
///
/// The whole prompt travels as a single user message. There is no system
/// prompt and no conversation history; every call starts fresh.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Wrap a prompt into a single user message
    pub fn user(prompt: impl Into<String>) -> Self {
        debug!("CompletionRequest::user: called");
        Self {
            messages: vec![Message::user(prompt)],
        }
    }
}

/// Completion result
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content, absent when the provider returned none
    pub content: Option<String>,
}
