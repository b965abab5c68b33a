//! Google Gemini (Generative Language API) client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent` and the model
//! listing endpoint. Pure parsing in `parse_generate_response` and
//! `parse_models_response` for testability.

use serde::{Deserialize, Serialize};

use super::types::LlmError;

const API_VERSION: &str = "v1beta";
const MODELS_PAGE_SIZE: u32 = 1000;

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(http: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self { http, api_key, base_url }
    }

    /// URL for a model method; accepts both `gemini-x` and `models/gemini-x`.
    fn model_url(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/{API_VERSION}/models/{model}:{method}", self.base_url)
    }

    pub async fn generate(&self, model: &str, max_tokens: u32, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateRequest {
            contents: vec![RequestContent { role: "user", parts: vec![RequestPart { text: prompt }] }],
            generation_config: GenerationConfig { max_output_tokens: max_tokens },
        };
        let request = self
            .http
            .post(self.model_url(model, "generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .json(&body);
        let text = super::send(request).await?;
        parse_generate_response(&text)
    }

    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let url = format!("{}/{API_VERSION}/models", self.base_url);
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self
                .http
                .get(&url)
                .header("x-goog-api-key", &self.api_key)
                .query(&[("pageSize", MODELS_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }
            let text = super::send(request).await?;
            let page = parse_models_response(&text)?;
            names.extend(page.names);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(names)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
    thought: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
}

/// One page of the model listing.
#[derive(Debug)]
pub(crate) struct ModelsPage {
    pub names: Vec<String>,
    pub next_page_token: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the answer text from the first candidate, skipping thought parts.
pub(crate) fn parse_generate_response(json: &str) -> Result<String, LlmError> {
    let response: GenerateResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(LlmError::EmptyResponse(format!("prompt blocked: {reason}")));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(LlmError::EmptyResponse("no candidates".to_string()));
    };

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| part.thought != Some(true))
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "unknown".to_string());
        return Err(LlmError::EmptyResponse(format!("no text in candidate (finish reason {reason})")));
    }
    Ok(text)
}

pub(crate) fn parse_models_response(json: &str) -> Result<ModelsPage, LlmError> {
    let response: ModelsResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    Ok(ModelsPage {
        names: response.models.into_iter().map(|m| m.name).collect(),
        next_page_token: response.next_page_token,
    })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
