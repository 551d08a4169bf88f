//! Beat specification assembly.

use crate::{
    BeatgenConfig, CharacterStateMerge, OutlineContext, OverTimeCardMerge, PassThroughThreads,
    Pov, ThreadTimeFilter, build_outline_context, determine_pov_character, load_master_outline,
    load_scene_outline,
};
use fabula_codex::{Card, CardSet, CodexStore};
use fabula_core::{BeatIds, StoryLayout};
use fabula_error::FabulaResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// A character card joined with its over-time card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MergedCharacter {
    /// Base card id
    id: String,
    /// Character name, falling back to the id
    name: String,
    /// The base character card
    base_card: Card,
    /// Matching over-time card, if any
    over_time: Option<Card>,
    /// State for the current chapter
    chapter_state: Option<String>,
}

impl MergedCharacter {
    /// Joins a base card with an optional over-time card, taking the
    /// chapter state from the over-time card.
    pub fn new(base_card: Card, over_time: Option<Card>) -> Self {
        let chapter_state = over_time.as_ref().and_then(|c| c.chapter_state().clone());
        Self {
            id: base_card.id().clone(),
            name: base_card.display_name().to_string(),
            base_card,
            over_time,
            chapter_state,
        }
    }

    /// Replaces the chapter state.
    pub fn with_chapter_state(mut self, state: Option<String>) -> Self {
        self.chapter_state = state;
        self
    }
}

/// Everything the model should know about one beat.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct BeatSpec {
    /// Chapter, scene and beat identifiers
    ids: BeatIds,
    /// Point-of-view character
    #[builder(default)]
    pov: Option<Pov>,
    /// Outline context
    #[builder(default)]
    outline: OutlineContext,
    /// Characters in card order
    #[builder(default)]
    characters: Vec<MergedCharacter>,
    /// Location cards
    #[builder(default)]
    locations: CardSet,
    /// Thread cards after time filtering
    #[builder(default)]
    threads: CardSet,
    /// Project style guide
    #[builder(default)]
    style: Option<Card>,
    /// Voice guide for the POV character
    #[builder(default)]
    voice: Option<Card>,
    /// Configuration the spec was built with
    #[builder(default)]
    generator_config: BeatgenConfig,
}

impl BeatSpec {
    /// Creates a builder for BeatSpec.
    pub fn builder() -> BeatSpecBuilder {
        BeatSpecBuilder::default()
    }
}

/// Builds beat specs with configurable time-aware strategies.
pub struct BeatSpecAssembler {
    thread_filter: Box<dyn ThreadTimeFilter>,
    character_merge: Box<dyn CharacterStateMerge>,
}

impl Default for BeatSpecAssembler {
    fn default() -> Self {
        Self::new(PassThroughThreads, OverTimeCardMerge)
    }
}

impl std::fmt::Debug for BeatSpecAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeatSpecAssembler").finish_non_exhaustive()
    }
}

impl BeatSpecAssembler {
    /// Assembler with the given strategies.
    pub fn new(
        thread_filter: impl ThreadTimeFilter + 'static,
        character_merge: impl CharacterStateMerge + 'static,
    ) -> Self {
        Self {
            thread_filter: Box::new(thread_filter),
            character_merge: Box::new(character_merge),
        }
    }

    /// Gathers outline, codex and configuration data for one beat.
    ///
    /// # Errors
    ///
    /// Fails when `beatgen.yaml` or `codex/index.yaml` exists but cannot be
    /// parsed. Missing outlines, folders and cards yield empty data.
    #[tracing::instrument(skip(self, story_root), fields(root = %story_root.as_ref().display()))]
    pub fn assemble(
        &self,
        story_root: impl AsRef<Path>,
        chapter_num: u32,
        scene_num: u32,
        beat_num: u32,
    ) -> FabulaResult<BeatSpec> {
        let layout = StoryLayout::new(story_root.as_ref());
        let cfg = BeatgenConfig::load(&layout)?;
        let rules = cfg.context_rules();

        let master = load_master_outline(&layout);
        let scene = load_scene_outline(&layout, chapter_num, scene_num);
        let outline = build_outline_context(&master, &scene, chapter_num, rules);

        let codex = CodexStore::from_layout(layout)?;
        let characters = if *rules.include_characters() {
            codex.characters_for_scene(scene.raw_text())
        } else {
            CardSet::new()
        };
        let locations = if *rules.include_locations() {
            codex.locations_for_scene(scene.raw_text())
        } else {
            CardSet::new()
        };
        let threads = if *rules.include_threads() && *cfg.threads().use_threads() {
            codex.threads()
        } else {
            CardSet::new()
        };
        let style = codex.style_guide();

        let over_time = if *cfg.character_over_time().use_over_time() {
            let ids: Vec<String> = characters.ids().map(String::from).collect();
            codex.characters_over_time(&ids)
        } else {
            BTreeMap::new()
        };

        let pov = determine_pov_character(&scene, &characters);
        let voice = pov.as_ref().and_then(|pov| {
            let name = characters
                .get(pov.id())
                .and_then(|card| card.name().as_deref());
            codex.voice_for_name(name)
        });

        let threads = self.thread_filter.filter(threads, chapter_num, cfg.threads());
        let characters = self.character_merge.merge(
            &characters,
            &over_time,
            chapter_num,
            cfg.character_over_time(),
        );

        debug!(
            characters = characters.len(),
            locations = locations.len(),
            threads = threads.len(),
            pov = ?pov.as_ref().map(|p| p.id()),
            "Assembled beat spec"
        );

        Ok(BeatSpec {
            ids: BeatIds::new(chapter_num, scene_num, beat_num),
            pov,
            outline,
            characters,
            locations,
            threads,
            style,
            voice,
            generator_config: cfg,
        })
    }
}

/// Builds a beat spec with the default strategies.
///
/// # Errors
///
/// See [`BeatSpecAssembler::assemble`].
pub fn build_beat_spec(
    story_root: impl AsRef<Path>,
    chapter_num: u32,
    scene_num: u32,
    beat_num: u32,
) -> FabulaResult<BeatSpec> {
    BeatSpecAssembler::default().assemble(story_root, chapter_num, scene_num, beat_num)
}
