//! Trait definitions for Fabula model backends.
//!
//! The model call is the only asynchronous boundary in the toolkit. Everything
//! upstream of it (card loading, spec assembly, block and prompt rendering) is
//! synchronous.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::FabulaDriver;
