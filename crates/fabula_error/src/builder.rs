//! Errors from building typed requests.

/// Specific builder error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A builder rejected its inputs
    #[display("Could not build {}: {}", target, reason)]
    Incomplete {
        /// Type being built
        target: String,
        /// Builder's own error text
        reason: String,
    },
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::new(BuilderErrorKind::Incomplete {
///     target: "GenerateRequest".to_string(),
///     reason: "`messages` must be initialized".to_string(),
/// });
/// assert!(err.to_string().contains("Could not build GenerateRequest"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at {}:{}", kind, file, line)]
pub struct BuilderError {
    /// Error kind
    pub kind: BuilderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BuilderError {
    /// Creates an error at the caller's location.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
