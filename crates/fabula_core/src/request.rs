//! Request and response types for text generation.

use crate::{Message, TokenUsageData};
use serde::{Deserialize, Serialize};

/// Generation request sent to a completion endpoint.
///
/// Parameters left as `None` fall back to the provider's configured defaults.
///
/// # Examples
///
/// ```
/// use fabula_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("You are a novelist."), Message::user("Go.")])
///     .temperature(Some(0.85))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Nucleus sampling cutoff
    #[builder(default)]
    top_p: Option<f32>,
    /// Model identifier override
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a request with no parameter overrides.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Creates a builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Completion text returned by a model, with optional token accounting.
///
/// # Examples
///
/// ```
/// use fabula_core::{GenerateResponse, TokenUsageData};
///
/// let response = GenerateResponse::new("The tide was out.", Some(TokenUsageData::new(Some(10), Some(5), Some(15))));
/// assert_eq!(response.text(), "The tide was out.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// The generated text of the first choice
    text: String,
    /// Token usage, if the backend reported it
    usage: Option<TokenUsageData>,
}

impl GenerateResponse {
    /// Creates a response.
    pub fn new(text: impl Into<String>, usage: Option<TokenUsageData>) -> Self {
        Self {
            text: text.into(),
            usage,
        }
    }
}
