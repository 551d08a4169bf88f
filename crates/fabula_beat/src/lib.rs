//! Beat specification assembly and prompt rendering.
//!
//! The pipeline for one beat runs, synchronously:
//!
//! 1. [`build_beat_spec`] gathers outline context and codex cards.
//! 2. [`build_blocks`] renders the spec into named text blocks.
//! 3. [`render_prompts_for_action`] substitutes the blocks into the templates
//!    an action declares in `toolkit/config/prompting.yaml`.
//! 4. [`build_messages_from_prompts`] turns rendered prompts into chat messages.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blocks;
mod config;
mod outline;
mod prompts;
mod spec;
mod strategy;

pub use blocks::{
    CODEX_BLOCK, DEFAULT_TARGET_WORDS, INSTRUCTIONS_BLOCK, PromptBlocks, STORY_SO_FAR_BLOCK,
    TARGET_WORDS, build_blocks,
};
pub use config::{BeatgenConfig, ContextRules, OverTimeConfig, PromptParameters, ThreadConfig};
pub use outline::{
    DEFAULT_BEAT_GOAL, MasterOutline, OutlineContext, OutlineContextBuilder, POV_MODE, Pov,
    SceneOutline, build_outline_context, determine_pov_character, load_master_outline,
    load_scene_outline,
};
pub use prompts::{
    ACTION_WRITE_BEAT, ActionConfig, PromptingConfig, RenderedPrompt, RenderedPrompts,
    SlotConfig, build_messages_from_prompts, render_prompts_for_action, render_template,
    render_template_set, slot_file_name,
};
pub use spec::{BeatSpec, BeatSpecAssembler, BeatSpecBuilder, MergedCharacter, build_beat_spec};
pub use strategy::{CharacterStateMerge, OverTimeCardMerge, PassThroughThreads, ThreadTimeFilter};
