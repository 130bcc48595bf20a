//! Chat completions client
//!
//! Groq serves the same chat completions wire format as OpenAI, so one
//! client covers both providers; only the base URL and key variable differ.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{CompletionClient, CompletionRequest, CompletionResponse, LlmError};
use crate::config::ResolvedLlmConfig;

/// Client for an OpenAI-compatible chat completions endpoint
pub struct ChatCompletionsClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl ChatCompletionsClient {
    /// Build a client for the endpoint and model named in the resolved config
    pub fn from_config(config: &ResolvedLlmConfig) -> Result<Self, LlmError> {
        debug!(?config, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http: Client::new(),
        })
    }

    /// Build the request body for the chat completions API
    ///
    /// Only the model and messages travel; generation parameters stay at the
    /// provider defaults.
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, "build_request_body: called");
        serde_json::json!({
            "model": self.model,
            "messages": request.messages,
        })
    }

    /// Parse the chat completions response
    ///
    /// Content comes from the first choice; anything else the provider sends
    /// is ignored.
    fn parse_response(&self, api_response: ChatResponse) -> CompletionResponse {
        debug!(choice_count = %api_response.choices.len(), "parse_response: called");
        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        CompletionResponse { content }
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionsClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, "complete: called");
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            debug!(%status, "complete: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, message: text });
        }

        debug!("complete: success");
        let api_response: ChatResponse = response.json().await?;
        Ok(self.parse_response(api_response))
    }
}

// Chat completions response types

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
