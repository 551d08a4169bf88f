//! Error types for the Fabula toolkit.
//!
//! This crate provides the foundation error types used throughout the Fabula workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Missing story files are not errors in Fabula. Loaders degrade to empty data,
//! so the types here describe configuration contract violations, model boundary
//! failures and manuscript writes.
//!
//! # Examples
//!
//! ```
//! use fabula_error::{ConfigError, FabulaResult};
//! use std::path::Path;
//!
//! fn load_settings() -> FabulaResult<String> {
//!     Err(ConfigError::read(Path::new("toolkit/config/prompting.yaml"), "not found"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod json;
mod models;
mod prompt;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use prompt::{PromptError, PromptErrorKind};
pub use storage::{StorageError, StorageErrorKind};
