//! HTTP client for OpenAI-compatible APIs.

use crate::openai_compat::{ChatResponse, conversions};
use crate::{DefaultParams, ModelConfig};
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::{FabulaResult, ModelsError, ModelsErrorKind, ModelsResult};
use fabula_interface::FabulaDriver;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

const PROVIDER: &str = "openai-compatible";

/// Client for any OpenAI-compatible chat completions endpoint.
///
/// Failures are returned as-is; the client never retries.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    defaults: DefaultParams,
}

impl OpenAICompatibleClient {
    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed.
    #[instrument(skip(api_key, config), fields(model = %config.model()))]
    pub fn new(api_key: impl Into<String>, config: &ModelConfig) -> ModelsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_seconds()))
            .build()
            .map_err(|e| {
                ModelsError::new(ModelsErrorKind::Http(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        let endpoint = config.endpoint();

        debug!(
            provider = %config.provider(),
            url = %endpoint,
            timeout_seconds = config.timeout_seconds(),
            "Created OpenAI-compatible client"
        );

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: config.model().clone(),
            endpoint,
            defaults: config.default_params().clone(),
        })
    }

    /// Creates a client, reading the API key from the configured variable.
    ///
    /// # Errors
    ///
    /// Fails, naming the variable, when the credential is unset or empty.
    pub fn from_config(config: &ModelConfig) -> ModelsResult<Self> {
        let api_key = config.resolve_api_key()?;
        Self::new(api_key, config)
    }

    /// Loads `model.yaml` under `story_root` and creates a client from it.
    pub fn from_story_root(story_root: impl AsRef<std::path::Path>) -> FabulaResult<Self> {
        let config = ModelConfig::load(story_root)?;
        Ok(Self::from_config(&config)?)
    }

    /// Full endpoint URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one chat completion request.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success status codes and unparseable bodies.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn chat(&self, req: &GenerateRequest) -> ModelsResult<GenerateResponse> {
        let chat_request = conversions::to_chat_request(req, &self.model, &self.defaults)?;

        debug!(
            message_count = chat_request.messages().len(),
            temperature = ?chat_request.temperature(),
            max_tokens = ?chat_request.max_tokens(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ModelsError::new(ModelsErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");
        conversions::from_chat_response(&chat_response)
    }
}

#[async_trait]
impl FabulaDriver for OpenAICompatibleClient {
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse> {
        Ok(self.chat(req).await?)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
