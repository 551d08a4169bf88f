//! JSON output errors.

/// Failure to render a value as JSON.
///
/// # Examples
///
/// ```
/// use fabula_error::JsonError;
///
/// let err = JsonError::new("beat spec", "key must be a string");
/// assert_eq!(err.context, "beat spec");
/// assert!(err.to_string().contains("Failed to serialize beat spec: key must be a string"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: Failed to serialize {}: {} at {}:{}", context, message, file, line)]
pub struct JsonError {
    /// What was being serialized
    pub context: String,
    /// serde_json error text
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Creates an error at the caller's location.
    #[track_caller]
    pub fn new(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self {
            context: context.into(),
            message: err.to_string(),
            line: location.line(),
            file: location.file(),
        }
    }
}
