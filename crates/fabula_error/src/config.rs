//! Configuration file errors.

/// What went wrong with a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The file exists (or is required) but could not be read
    #[display("Failed to read {}: {}", path, message)]
    Read {
        /// File path
        path: String,
        /// I/O error text
        message: String,
    },

    /// The document is not valid YAML
    #[display("Failed to parse {}: {}", document, message)]
    Parse {
        /// Document name, e.g. `beatgen.yaml`
        document: String,
        /// Parser error text
        message: String,
    },

    /// The document parsed but does not have the expected shape
    #[display("Invalid {}: {}", document, message)]
    Invalid {
        /// Document name
        document: String,
        /// Deserializer error text
        message: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use fabula_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Invalid {
///     document: "beatgen.yaml".to_string(),
///     message: "context_rules: expected a mapping".to_string(),
/// });
/// assert!(err.to_string().starts_with("Configuration Error: Invalid beatgen.yaml"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// Error kind
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Unreadable file.
    #[track_caller]
    pub fn read(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::new(ConfigErrorKind::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Malformed document.
    #[track_caller]
    pub fn parse(document: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::new(ConfigErrorKind::Parse {
            document: document.into(),
            message: err.to_string(),
        })
    }

    /// Well-formed document of the wrong shape.
    #[track_caller]
    pub fn invalid(document: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            document: document.into(),
            message: err.to_string(),
        })
    }
}
