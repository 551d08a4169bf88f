//! Rendering a beat spec into named prompt blocks.

use crate::{BeatSpec, DEFAULT_BEAT_GOAL, POV_MODE};
use fabula_codex::Card;
use serde::Serialize;

/// Lore for characters, locations and threads.
pub const CODEX_BLOCK: &str = "CODEX_BLOCK";
/// Chapter and scene summaries.
pub const STORY_SO_FAR_BLOCK: &str = "STORY_SO_FAR_BLOCK";
/// POV, beat goal and tone.
pub const INSTRUCTIONS_BLOCK: &str = "INSTRUCTIONS_BLOCK";
/// Word target.
pub const TARGET_WORDS: &str = "TARGET_WORDS";
/// Word target when the configuration sets none.
pub const DEFAULT_TARGET_WORDS: u32 = 400;

/// Named text fragments in insertion order.
///
/// # Examples
///
/// ```
/// use fabula_beat::PromptBlocks;
///
/// let mut blocks = PromptBlocks::new();
/// blocks.insert("TARGET_WORDS", "400");
/// blocks.insert("TARGET_WORDS", "250");
/// assert_eq!(blocks.get("TARGET_WORDS"), Some("250"));
/// assert_eq!(blocks.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptBlocks {
    entries: Vec<(String, String)>,
}

impl PromptBlocks {
    /// Creates an empty block map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a block, keeping the original position of an existing name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Looks a block up by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Blocks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no blocks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PromptBlocks {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PromptBlocks {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut blocks = Self::new();
        for (k, v) in iter {
            blocks.insert(k, v);
        }
        blocks
    }
}

/// Renders the four standard blocks for a beat.
#[tracing::instrument(skip_all, fields(beat = %spec.ids().beat_id()))]
pub fn build_blocks(spec: &BeatSpec) -> PromptBlocks {
    let target_words = spec
        .generator_config()
        .prompt_parameters()
        .target_words()
        .unwrap_or(DEFAULT_TARGET_WORDS);

    let mut blocks = PromptBlocks::new();
    blocks.insert(CODEX_BLOCK, codex_block(spec));
    blocks.insert(STORY_SO_FAR_BLOCK, story_so_far_block(spec));
    blocks.insert(INSTRUCTIONS_BLOCK, instructions_block(spec));
    blocks.insert(TARGET_WORDS, target_words.to_string());
    blocks
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn describe(card: &Card) -> Option<&str> {
    non_blank(card.summary().as_deref())
        .or_else(|| non_blank(card.description().as_deref()))
        .or_else(|| non_blank(Some(card.body())))
}

fn lore(kind: &str, name: &str, text: &str) -> String {
    format!("<lore name=\"{}: {}\">\n{}\n</lore>", kind, name, text)
}

fn codex_block(spec: &BeatSpec) -> String {
    let mut entries = Vec::new();

    for merged in spec.characters() {
        let mut parts = Vec::new();
        if let Some(text) = describe(merged.base_card()) {
            parts.push(text.to_string());
        }
        if let Some(state) = non_blank(merged.chapter_state().as_deref()) {
            parts.push(format!("In this chapter: {}", state));
        }
        if !parts.is_empty() {
            entries.push(lore("CHAR", merged.name(), &parts.join("\n")));
        }
    }

    for location in spec.locations() {
        if let Some(text) = describe(location) {
            entries.push(lore("LOC", location.display_name(), text));
        }
    }

    for thread in spec.threads() {
        let text = non_blank(thread.chapter_state().as_deref())
            .or_else(|| non_blank(thread.summary().as_deref()));
        if let Some(text) = text {
            entries.push(lore("THREAD", thread.display_name(), text));
        }
    }

    entries.join("\n\n").trim().to_string()
}

fn story_so_far_block(spec: &BeatSpec) -> String {
    let ids = spec.ids();
    let outline = spec.outline();

    let chapter_title = non_blank(Some(outline.chapter_title()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Chapter {}", ids.chapter_num));
    let scene_title = non_blank(Some(outline.scene_title()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Scene {}", ids.scene_num));
    let previous_title = non_blank(Some(outline.previous_scene_title())).unwrap_or("Previous Scene");

    let mut lines = vec![
        "<act number=\"1\" title=\"Novel\">".to_string(),
        format!(
            "  <chapter title=\"{}\" number=\"{}\">",
            chapter_title, ids.chapter_num
        ),
    ];
    if let Some(previous) = non_blank(Some(outline.previous_scene_summary())) {
        lines.push(format!(
            "    <scene title=\"{}\" number=\"{}\">",
            previous_title,
            ids.scene_num.saturating_sub(1)
        ));
        lines.push(format!("      {}", previous));
        lines.push("    </scene>".to_string());
    }
    lines.push(format!(
        "    <scene title=\"{}\" number=\"{}\">",
        scene_title, ids.scene_num
    ));
    if let Some(summary) = non_blank(Some(outline.scene_summary())) {
        lines.push(format!("      {}", summary));
    }
    lines.push("    </scene>".to_string());
    lines.push("  </chapter>".to_string());
    lines.push("</act>".to_string());
    lines.join("\n")
}

fn instructions_block(spec: &BeatSpec) -> String {
    let outline = spec.outline();
    let mode = spec.pov().as_ref().map_or(POV_MODE, |pov| pov.mode().as_str());
    let focus = spec
        .pov()
        .as_ref()
        .and_then(|pov| non_blank(Some(pov.name())));
    let goal = non_blank(Some(outline.beat_goal())).unwrap_or(DEFAULT_BEAT_GOAL);
    let tone = non_blank(Some(outline.tone())).or_else(|| {
        spec.style()
            .as_ref()
            .and_then(|style| non_blank(style.default_tone().as_deref()))
    });

    let mut lines = vec![match focus {
        Some(name) => format!("<pointOfView type=\"{}\" focus=\"{}\"/>", mode, name),
        None => format!("<pointOfView type=\"{}\"/>", mode),
    }];
    lines.push(String::new());
    lines.push("<beatGoal>".to_string());
    lines.push(format!("  {}", goal));
    lines.push("</beatGoal>".to_string());
    if let Some(tone) = tone {
        lines.push(String::new());
        lines.push("<tone>".to_string());
        lines.push(format!("  {}", tone));
        lines.push("</tone>".to_string());
    }
    lines.join("\n")
}
