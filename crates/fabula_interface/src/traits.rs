//! Driver trait for chat-completion backends.

use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::FabulaResult;

/// Core trait that every completion backend implements.
///
/// Implementations must not retry; transport and API failures surface to the
/// caller unchanged.
#[async_trait]
pub trait FabulaDriver: Send + Sync {
    /// Generate a completion for the request's messages.
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse>;

    /// Provider name (e.g., "openai-compatible").
    fn provider_name(&self) -> &'static str;

    /// Model identifier sent with each request.
    fn model_name(&self) -> &str;
}
