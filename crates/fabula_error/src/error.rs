//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, JsonError, ModelsError, PromptError, StorageError};

/// Every error condition a Fabula operation can surface.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaError, ConfigError};
///
/// let err: FabulaError = ConfigError::parse("codex/index.yaml", "bad indentation").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Prompt rendering error
    #[from(PromptError)]
    Prompt(PromptError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Manuscript storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaErrorKind, FabulaResult, ConfigError};
///
/// fn might_fail() -> FabulaResult<()> {
///     Err(ConfigError::invalid("model.yaml", "missing field `model`"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), FabulaErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
