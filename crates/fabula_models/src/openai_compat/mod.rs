//! OpenAI-compatible chat completions client.
//!
//! Works with OpenAI itself and with local or proxy servers exposing the same
//! API at a custom base URL.

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatResponseMessage,
    ChatUsage,
};
