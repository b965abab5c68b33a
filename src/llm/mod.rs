//! LLM — multi-provider adapter for tip generation.
//!
//! DESIGN
//! ======
//! Configured from environment variables. The `LlmClient` dispatches to
//! Gemini, an OpenAI-compatible API, or Anthropic based on `LLM_PROVIDER`.
//! Each provider module keeps response parsing in pure functions so that
//! wire formats are testable without the network.

pub mod anthropic;
pub mod config;
pub mod gemini;
pub mod openai;
pub mod types;

use std::time::Duration;

use config::{LlmConfig, LlmProviderKind, LlmTimeouts};
pub use types::{LlmError, TextGenerator};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client that dispatches to the configured provider.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
    max_tokens: u32,
}

enum LlmProvider {
    Gemini(gemini::GeminiClient),
    OpenAi(openai::OpenAiClient),
    Anthropic(anthropic::AnthropicClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let http = build_http(config.timeouts)?;
        let inner = match config.provider {
            LlmProviderKind::Gemini => {
                LlmProvider::Gemini(gemini::GeminiClient::new(http, config.api_key, config.base_url))
            }
            LlmProviderKind::OpenAi => {
                LlmProvider::OpenAi(openai::OpenAiClient::new(http, config.api_key, config.base_url))
            }
            LlmProviderKind::Anthropic => {
                LlmProvider::Anthropic(anthropic::AnthropicClient::new(http, config.api_key, config.base_url))
            }
        };
        Ok(Self { inner, model: config.model, max_tokens: config.max_tokens })
    }

    /// Return the configured model name (e.g. `"gemini-1.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// List the model names available to the configured API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the listing cannot be parsed.
    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        match &self.inner {
            LlmProvider::Gemini(c) => c.list_models().await,
            LlmProvider::OpenAi(c) => c.list_models().await,
            LlmProvider::Anthropic(c) => c.list_models().await,
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let text = match &self.inner {
            LlmProvider::Gemini(c) => c.generate(&self.model, self.max_tokens, prompt).await?,
            LlmProvider::OpenAi(c) => c.generate(&self.model, self.max_tokens, prompt).await?,
            LlmProvider::Anthropic(c) => c.generate(&self.model, self.max_tokens, prompt).await?,
        };
        Ok(text.trim().to_string())
    }
}

// =============================================================================
// HTTP HELPERS
// =============================================================================

fn build_http(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

/// Send a prepared request and return the body of a 200 response.
async fn send(request: reqwest::RequestBuilder) -> Result<String, LlmError> {
    let response = request
        .send()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    if status != 200 {
        return Err(LlmError::ApiResponse { status, body: text });
    }
    Ok(text)
}
