//! Anthropic Messages API client.
//!
//! Thin HTTP wrapper for `/v1/messages` and `/v1/models`. Pure parsing in
//! `parse_response` for testability.

use super::types::LlmError;

const API_VERSION: &str = "2023-06-01";

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    #[must_use]
    pub fn new(http: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self { http, api_key, base_url }
    }

    pub async fn generate(&self, model: &str, max_tokens: u32, prompt: &str) -> Result<String, LlmError> {
        let messages = [ApiMessage { role: "user", content: prompt }];
        let body = ApiRequest { model, max_tokens, messages: &messages };
        let request = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body);
        let text = super::send(request).await?;
        parse_response(&text)
    }

    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let request = self
            .http
            .get(format!("{}/v1/models", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION);
        let text = super::send(request).await?;
        parse_models_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [ApiMessage<'a>],
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },

    /// Any other block type (thinking, tool use) is ignored.
    #[serde(other)]
    Other,
}

#[derive(serde::Deserialize)]
struct ModelsResponse {
    data: Vec<ModelEntry>,
}

#[derive(serde::Deserialize)]
struct ModelEntry {
    id: String,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text: String = api
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .collect();

    if text.trim().is_empty() {
        let reason = api.stop_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(LlmError::EmptyResponse(format!("no text blocks (stop reason {reason})")));
    }
    Ok(text)
}

fn parse_models_response(json: &str) -> Result<Vec<String>, LlmError> {
    let api: ModelsResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    Ok(api.data.into_iter().map(|m| m.id).collect())
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
