//! Prompt rendering error types.

/// Specific error conditions for prompt template rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PromptErrorKind {
    /// The requested action is not declared in the prompting configuration
    #[display(
        "Action '{}' not found in prompting.yaml. Available actions: {}",
        action,
        available.join(", ")
    )]
    UnknownAction {
        /// Action key that was requested
        action: String,
        /// Known action keys, sorted
        available: Vec<String>,
    },
    /// A required slot has no template file
    #[display("Required template file for slot '{}' not found at: {}", slot, path)]
    TemplateNotFound {
        /// Slot name
        slot: String,
        /// Path that was looked up
        path: String,
    },
    /// Template file exists but could not be read
    #[display("Failed to read template {}: {}", path, message)]
    TemplateRead {
        /// Template path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// A slot the caller depends on was not rendered
    #[display("Rendered prompts for '{}' have no '{}' slot", action, slot)]
    MissingSlot {
        /// Action key
        action: String,
        /// Slot name
        slot: String,
    },
}

/// Error type for prompt rendering.
///
/// # Examples
///
/// ```
/// use fabula_error::{PromptError, PromptErrorKind};
///
/// let err = PromptError::new(PromptErrorKind::UnknownAction {
///     action: "UNKNOWN".to_string(),
///     available: vec!["ACTIONS_WRITE_BEAT".to_string()],
/// });
/// assert!(format!("{}", err).contains("ACTIONS_WRITE_BEAT"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at line {} in {}", kind, line, file)]
pub struct PromptError {
    /// The specific error condition
    pub kind: PromptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PromptError {
    /// Create a new PromptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PromptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
