//! CompletionClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// One-shot LLM client
///
/// This is the seam between the pipeline and the provider. Each completion
/// request is independent; no conversation state is kept between calls.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one completion request and wait for the full response
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
