use reqwest::{header, Client};
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::error::UpstreamError;
use crate::models::{ChatMessage, MessagesRequest, MessagesResponse};

const DEFAULT_FAILURE_MESSAGE: &str = "API request failed";

/// Client for the Anthropic Messages API.
///
/// One attempt per call: no retry, no timeout beyond the transport's own.
pub struct ClaudeClient {
    http_client: Client,
    api_key: String,
    messages_url: String,
    model: String,
    version: String,
}

impl ClaudeClient {
    /// Returns `None` when no API key is configured.
    pub fn new(config: &AppConfig) -> Option<Self> {
        let api_key = config.anthropic_api_key.clone()?;

        Some(Self {
            http_client: Client::new(),
            api_key,
            messages_url: config.messages_url(),
            model: config.anthropic_model.clone(),
            version: config.anthropic_version.clone(),
        })
    }

    /// Sends `prompt` as a single user message and returns the text blocks of
    /// the reply joined by newlines and trimmed.
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, UpstreamError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, max_tokens, prompt_len = prompt.len(), "Sending request to Messages API");

        let response = self
            .http_client
            .post(&self.messages_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.version)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<MessagesResponse>(&response_text)
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());

            error!("Messages API returned {}: {}", status, message);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: MessagesResponse = serde_json::from_str(&response_text)?;

        if let Some(api_error) = envelope.error {
            return Err(UpstreamError::Api(
                api_error.message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ));
        }

        let text = extract_text(&envelope);
        if text.is_empty() {
            return Err(UpstreamError::EmptyContent);
        }

        Ok(text)
    }
}

/// Joins every `text` block in order; other block types are skipped.
pub fn extract_text(envelope: &MessagesResponse) -> String {
    envelope
        .content
        .iter()
        .filter(|block| block.block_type == "text")
        .map(|block| block.text.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
