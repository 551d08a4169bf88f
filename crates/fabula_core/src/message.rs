//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A role-tagged text message.
///
/// # Examples
///
/// ```
/// use fabula_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Write the next beat.");
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Write the next beat.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The message text
    content: String,
}

impl Message {
    /// Creates a message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
