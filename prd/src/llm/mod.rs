//! LLM integration
//!
//! One-shot chat completions against OpenAI-compatible providers. The
//! [`CompletionClient`] trait is the seam the pipeline works against;
//! [`ChatCompletionsClient`] is the single implementation, pointed at Groq
//! or OpenAI by configuration.

use std::sync::Arc;

use tracing::debug;

use crate::config::{LlmConfig, ResolvedLlmConfig};

mod chat;
pub mod client;
mod error;
mod types;

pub use chat::ChatCompletionsClient;
pub use client::CompletionClient;
pub use error::LlmError;
pub use types::{CompletionRequest, CompletionResponse, Message};

/// Create a client from unresolved configuration
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn CompletionClient>, LlmError> {
    debug!(provider = %config.provider, "create_client: called");
    let resolved = config
        .resolve()
        .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;
    create_client_from_resolved(&resolved)
}

/// Create a client once provider, model, and base URL are already resolved
pub fn create_client_from_resolved(
    config: &ResolvedLlmConfig,
) -> Result<Arc<dyn CompletionClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client_from_resolved: called");
    match config.provider.as_str() {
        "groq" | "openai" => {
            debug!("create_client_from_resolved: chat completions provider");
            Ok(Arc::new(ChatCompletionsClient::from_config(config)?))
        }
        other => Err(LlmError::InvalidResponse(format!(
            "Unknown LLM provider: '{other}'. Supported: groq, openai"
        ))),
    }
}
