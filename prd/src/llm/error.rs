//! LLM error types

use thiserror::Error;

/// Error from an LLM provider call
///
/// The pipeline never distinguishes between these downstream; any variant
/// sends the generation down the fixed fallback path.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from the provider
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The provider answered with something unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
