//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message in a chat-completion conversation.
///
/// Serialized in lowercase, matching both the prompting configuration and the
/// OpenAI chat format.
///
/// # Examples
///
/// ```
/// use fabula_core::Role;
/// use std::str::FromStr;
///
/// assert_eq!(Role::from_str("system").unwrap(), Role::System);
/// assert_eq!(Role::User.as_ref(), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    #[display("system")]
    System,
    /// User messages carry the task and its payload
    #[display("user")]
    User,
    /// Assistant messages are prior model turns
    #[display("assistant")]
    Assistant,
}
