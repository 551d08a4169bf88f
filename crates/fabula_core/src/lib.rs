//! Core data types for the Fabula toolkit.
//!
//! This crate provides the foundation data types shared by every Fabula crate:
//! the story directory layout, conversation messages, and the request/response
//! pair exchanged with a completion endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod layout;
mod message;
mod request;
mod role;
mod token_usage;

pub use layout::{BeatIds, StoryLayout};
pub use message::Message;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use token_usage::TokenUsageData;
