//! Prompts command handler.

use crate::cli::BeatArgs;
use fabula::{FabulaResult, build_beat_spec, build_blocks, render_prompts_for_action};

/// Renders an action's prompts for a beat and prints each slot.
pub fn show_prompts(args: &BeatArgs, action: &str) -> FabulaResult<()> {
    let spec = build_beat_spec(&args.story_root, args.chapter, args.scene, args.beat)?;
    let blocks = build_blocks(&spec);
    let rendered = render_prompts_for_action(&args.story_root, action, &blocks)?;

    for prompt in rendered.prompts() {
        println!("===== {} ({}) =====", prompt.slot(), prompt.role());
        println!("{}", prompt.text());
        println!();
    }
    Ok(())
}
