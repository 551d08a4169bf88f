//! Fabula - beat-by-beat fiction generation.
//!
//! Fabula assembles everything a model needs to write one narrative beat
//! (outline context, character and location lore, plot threads, style and
//! voice guides), renders it through story-local prompt templates, and writes
//! the completion back into the manuscript tree.
//!
//! # Story layout
//!
//! ```text
//! codex/index.yaml                              card type -> folder
//! codex/<folder>/*.md                           lore cards with YAML front matter
//! outlines/master_outline.md
//! manuscript/chapters/chXX/scenes/scYY.md       scene outlines
//! manuscript/chapters/chXX/beats/scYY_bZZ.md    generated beats
//! toolkit/config/{beatgen,prompting,model}.yaml
//! toolkit/prompts/<template_set>/*.txt
//! ```
//!
//! # Architecture
//!
//! - `fabula_error` - Error types
//! - `fabula_core` - Story layout, messages, requests
//! - `fabula_interface` - `FabulaDriver` trait
//! - `fabula_codex` - Lore card store
//! - `fabula_beat` - Beat spec assembly, blocks, prompt templates
//! - `fabula_models` - OpenAI-compatible client
//!
//! This crate re-exports everything and adds the job orchestration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod jobs;

pub use fabula_beat::*;
pub use fabula_codex::*;
pub use fabula_core::*;
pub use fabula_error::*;
pub use fabula_interface::*;
pub use fabula_models::*;

pub use jobs::{JobStatus, PreparedBeat, WriteBeatResult, prepare_write_beat, run_write_beat_job};
