//! OpenAI-compatible API client.
//!
//! Uses `/chat/completions` with a single user message; works against any
//! OpenAI-compatible base URL (`LLM_BASE_URL`).

use serde::Serialize;
use serde_json::Value;

use super::types::LlmError;

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    #[must_use]
    pub fn new(http: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self { http, api_key, base_url }
    }

    pub async fn generate(&self, model: &str, max_tokens: u32, prompt: &str) -> Result<String, LlmError> {
        let messages = [CcMessage { role: "user", content: prompt }];
        let body = CcRequest { model, max_tokens, messages: &messages };
        let request = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body);
        let text = super::send(request).await?;
        parse_chat_completions_response(&text)
    }

    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let request = self
            .http
            .get(format!("{}/models", self.base_url))
            .bearer_auth(&self.api_key);
        let text = super::send(request).await?;
        parse_models_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [CcMessage<'a>],
}

#[derive(Serialize)]
struct CcMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_chat_completions_response(json_text: &str) -> Result<String, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0]".to_string()));
    };

    let text = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or("");
    if text.trim().is_empty() {
        let reason = choice
            .get("finish_reason")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        return Err(LlmError::EmptyResponse(format!("no message content (finish reason {reason})")));
    }
    Ok(text.to_string())
}

pub(crate) fn parse_models_response(json_text: &str) -> Result<Vec<String>, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let Some(data) = root.get("data").and_then(Value::as_array) else {
        return Err(LlmError::ApiParse("models: missing data".to_string()));
    };
    Ok(data
        .iter()
        .filter_map(|m| m.get("id").and_then(Value::as_str))
        .map(str::to_owned)
        .collect())
}
