//! Token usage tracking for completion requests.

use serde::{Deserialize, Serialize};

/// Token usage reported by a completion endpoint.
///
/// Each counter is optional because OpenAI-compatible servers differ in what
/// they report.
///
/// # Examples
///
/// ```
/// use fabula_core::TokenUsageData;
///
/// let usage = TokenUsageData::new(Some(150), Some(50), Some(200));
/// assert_eq!(*usage.total_tokens(), Some(200));
/// assert_eq!(usage.to_string(), "prompt=150 completion=50 total=200");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct TokenUsageData {
    /// Tokens in the prompt.
    prompt_tokens: Option<u64>,
    /// Tokens in the completion.
    completion_tokens: Option<u64>,
    /// Total tokens as accounted by the provider.
    total_tokens: Option<u64>,
}

impl TokenUsageData {
    /// Creates new token usage data.
    pub fn new(
        prompt_tokens: Option<u64>,
        completion_tokens: Option<u64>,
        total_tokens: Option<u64>,
    ) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }

    /// True when no counter was reported.
    pub fn is_empty(&self) -> bool {
        self.prompt_tokens.is_none() && self.completion_tokens.is_none() && self.total_tokens.is_none()
    }
}

impl std::fmt::Display for TokenUsageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |v: Option<u64>| v.map_or_else(|| "?".to_string(), |n| n.to_string());
        write!(
            f,
            "prompt={} completion={} total={}",
            show(self.prompt_tokens),
            show(self.completion_tokens),
            show(self.total_tokens)
        )
    }
}
