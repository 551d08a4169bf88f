//! Spec command handler.

use crate::cli::BeatArgs;
use fabula::{FabulaResult, JsonError, build_beat_spec};

/// Prints the beat spec as pretty JSON.
pub fn show_spec(args: &BeatArgs) -> FabulaResult<()> {
    let spec = build_beat_spec(&args.story_root, args.chapter, args.scene, args.beat)?;
    let json = serde_json::to_string_pretty(&spec)
        .map_err(|e| JsonError::new("beat spec", e))?;
    println!("{}", json);
    Ok(())
}
