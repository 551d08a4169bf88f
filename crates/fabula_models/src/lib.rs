//! Chat-completion model client.
//!
//! Reads `toolkit/config/model.yaml` (with `FABULA_*` environment overrides)
//! and talks to any OpenAI-compatible `/chat/completions` endpoint.
//!
//! # Example
//!
//! ```no_run
//! use fabula_core::{GenerateRequest, Message};
//! use fabula_interface::FabulaDriver;
//! use fabula_models::{ModelConfig, OpenAICompatibleClient};
//!
//! # async fn example() -> fabula_error::FabulaResult<()> {
//! let config = ModelConfig::load("my-story")?;
//! let client = OpenAICompatibleClient::from_config(&config)?;
//! let request = GenerateRequest::new(vec![Message::user("Hello")]);
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
pub mod openai_compat;

pub use config::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DefaultParams, ModelConfig};
pub use openai_compat::OpenAICompatibleClient;
