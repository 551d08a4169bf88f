//! Model provider errors.

/// Model provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Credential environment variable is unset or empty
    #[display("Environment variable '{}' is not set; cannot call model", _0)]
    MissingCredential(String),

    /// Transport-level failure
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Endpoint answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body did not match the chat completions shape
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Response contained no choices
    #[display("Model returned no choices")]
    EmptyResponse,

    /// Request or response could not be built
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::{ModelsError, ModelsErrorKind};
    ///
    /// let err = ModelsError::new(ModelsErrorKind::MissingCredential("LLM_API_KEY".into()));
    /// assert!(format!("{}", err).contains("LLM_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
