//! Type conversions between Fabula and OpenAI formats.

use crate::DefaultParams;
use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse};
use fabula_core::{GenerateRequest, GenerateResponse, TokenUsageData};
use fabula_error::{ModelsError, ModelsErrorKind, ModelsResult};

/// Converts a GenerateRequest to OpenAI chat format.
///
/// Per-request parameters take precedence over `defaults`; the request's
/// model, when set, replaces `model`.
pub fn to_chat_request(
    req: &GenerateRequest,
    model: &str,
    defaults: &DefaultParams,
) -> ModelsResult<ChatRequest> {
    let messages: Vec<ChatMessage> = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().to_string(),
            content: msg.content().clone(),
        })
        .collect();

    let mut builder = ChatRequest::builder();
    builder
        .model(req.model().clone().unwrap_or_else(|| model.to_string()))
        .messages(messages)
        .max_tokens(req.max_tokens().or(*defaults.max_tokens()))
        .temperature(req.temperature().or(*defaults.temperature()))
        .top_p(req.top_p().or(*defaults.top_p()))
        .extra(defaults.extra().clone());

    builder.build().map_err(|e| {
        ModelsError::new(ModelsErrorKind::Builder(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Converts an OpenAI chat response to a GenerateResponse.
///
/// Takes the first choice's text. Usage is kept when the server reported any
/// counter.
pub fn from_chat_response(response: &ChatResponse) -> ModelsResult<GenerateResponse> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyResponse))?;
    let text = choice.message.content.clone().ok_or_else(|| {
        ModelsError::new(ModelsErrorKind::ResponseParsing(
            "First choice has no message content".to_string(),
        ))
    })?;

    let usage = response
        .usage
        .map(|u| TokenUsageData::new(u.prompt_tokens, u.completion_tokens, u.total_tokens))
        .filter(|u| !u.is_empty());

    Ok(GenerateResponse::new(text, usage))
}
