//! Outline reading and POV selection.

use crate::ContextRules;
use fabula_codex::CardSet;
use fabula_core::StoryLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Beat goal used when a scene has no summary.
pub const DEFAULT_BEAT_GOAL: &str = "Continue the story from the current point.";

/// Narrative mode assigned to every POV.
pub const POV_MODE: &str = "third person limited";

/// Raw text of `outlines/master_outline.md`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct MasterOutline {
    /// File contents, empty when absent
    raw_text: String,
}

/// Raw text of one scene outline and where it was looked for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct SceneOutline {
    /// File contents, empty when absent
    raw_text: String,
    /// Expected location of the scene outline
    path: PathBuf,
}

impl SceneOutline {
    /// Scene outline with the given text.
    pub fn new(raw_text: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            raw_text: raw_text.into(),
            path: path.into(),
        }
    }
}

/// Compact outline view for one scene.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct OutlineContext {
    /// Chapter title
    chapter_title: String,
    /// Scene title
    scene_title: String,
    /// One-line scene summary
    scene_summary: String,
    /// Title of the previous scene
    previous_scene_title: String,
    /// Summary of the previous scene
    previous_scene_summary: String,
    /// What this beat must accomplish
    beat_goal: String,
    /// Requested tone
    tone: String,
}

impl OutlineContext {
    /// Creates a builder for OutlineContext.
    pub fn builder() -> OutlineContextBuilder {
        OutlineContextBuilder::default()
    }
}

/// Point-of-view character for a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Pov {
    /// Character card id
    id: String,
    /// Character name, falling back to the id
    name: String,
    /// Narrative mode
    mode: String,
}

impl Pov {
    /// POV in the default narrative mode.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mode: POV_MODE.to_string(),
        }
    }
}

fn read_optional(path: &Path) -> String {
    if !path.exists() {
        debug!(path = %path.display(), "Outline not found");
        return String::new();
    }
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read outline");
            String::new()
        }
    }
}

/// Loads the master outline, empty when absent.
#[tracing::instrument(skip_all, fields(root = %layout.root().display()))]
pub fn load_master_outline(layout: &StoryLayout) -> MasterOutline {
    MasterOutline {
        raw_text: read_optional(&layout.master_outline()),
    }
}

/// Loads `manuscript/chapters/chXX/scenes/scYY.md`, empty when absent.
#[tracing::instrument(skip(layout))]
pub fn load_scene_outline(layout: &StoryLayout, chapter_num: u32, scene_num: u32) -> SceneOutline {
    let path = layout.scene_file(chapter_num, scene_num);
    SceneOutline {
        raw_text: read_optional(&path),
        path,
    }
}

fn first_heading(text: &str, prefix: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.strip_prefix(prefix))
        .map(|rest| rest.trim().to_string())
        .filter(|title| !title.is_empty())
}

fn first_content_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

/// Derives titles, summary and beat goal from the scene outline.
///
/// The master outline and context rules are accepted but not yet consulted.
///
/// # Examples
///
/// ```
/// use fabula_beat::{ContextRules, MasterOutline, SceneOutline, build_outline_context};
///
/// let scene = SceneOutline::new("# The Tide\n## Low Water\n\nMaya finds the map.\n", "sc01.md");
/// let ctx = build_outline_context(&MasterOutline::default(), &scene, 1, &ContextRules::default());
/// assert_eq!(ctx.chapter_title(), "The Tide");
/// assert_eq!(ctx.scene_title(), "Low Water");
/// assert_eq!(ctx.beat_goal(), "Maya finds the map.");
/// ```
pub fn build_outline_context(
    _master: &MasterOutline,
    scene: &SceneOutline,
    chapter_num: u32,
    rules: &ContextRules,
) -> OutlineContext {
    // Without outline context the scene reads as if it had no outline file.
    let text = if *rules.include_outline() {
        scene.raw_text().as_str()
    } else {
        ""
    };
    let chapter_title =
        first_heading(text, "# ").unwrap_or_else(|| format!("Chapter {}", chapter_num));
    let scene_title = first_heading(text, "## ").unwrap_or_else(|| "Scene".to_string());
    let scene_summary = first_content_line(text).unwrap_or_default();
    let beat_goal = if scene_summary.is_empty() {
        DEFAULT_BEAT_GOAL.to_string()
    } else {
        scene_summary.clone()
    };

    OutlineContext {
        chapter_title,
        scene_title,
        scene_summary,
        previous_scene_title: String::new(),
        previous_scene_summary: String::new(),
        beat_goal,
        tone: String::new(),
    }
}

/// Picks the first character in card order as the POV.
pub fn determine_pov_character(_scene: &SceneOutline, characters: &CardSet) -> Option<Pov> {
    let card = characters.first()?;
    Some(Pov::new(card.id().clone(), card.display_name()))
}
