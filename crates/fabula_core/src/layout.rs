//! Story directory layout.
//!
//! A story root is laid out as:
//!
//! ```text
//! codex/index.yaml
//! outlines/master_outline.md
//! manuscript/chapters/chXX/scenes/scYY.md
//! manuscript/chapters/chXX/beats/scYY_bZZ.md
//! toolkit/config/{beatgen,prompting,model}.yaml
//! toolkit/prompts/<template_set>/
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolves well-known paths inside a story root.
///
/// # Examples
///
/// ```
/// use fabula_core::StoryLayout;
/// use std::path::Path;
///
/// let layout = StoryLayout::new("/stories/tide");
/// assert_eq!(
///     layout.scene_file(1, 2),
///     Path::new("/stories/tide/manuscript/chapters/ch01/scenes/sc02.md")
/// );
/// assert_eq!(
///     layout.beat_file(3, 1, 12),
///     Path::new("/stories/tide/manuscript/chapters/ch03/beats/sc01_b12.md")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryLayout {
    root: PathBuf,
}

impl StoryLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The story root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/manuscript`
    pub fn manuscript_root(&self) -> PathBuf {
        self.root.join("manuscript")
    }

    /// `<root>/codex`
    pub fn codex_root(&self) -> PathBuf {
        self.root.join("codex")
    }

    /// `<root>/codex/index.yaml`
    pub fn codex_index(&self) -> PathBuf {
        self.codex_root().join("index.yaml")
    }

    /// `<root>/outlines`
    pub fn outlines_root(&self) -> PathBuf {
        self.root.join("outlines")
    }

    /// `<root>/outlines/master_outline.md`
    pub fn master_outline(&self) -> PathBuf {
        self.outlines_root().join("master_outline.md")
    }

    /// `<root>/toolkit/config`
    pub fn config_root(&self) -> PathBuf {
        self.root.join("toolkit").join("config")
    }

    /// `<root>/toolkit/config/<name>`
    pub fn config_file(&self, name: &str) -> PathBuf {
        self.config_root().join(name)
    }

    /// `<root>/toolkit/prompts/<template_set>`
    pub fn template_set_dir(&self, template_set: &str) -> PathBuf {
        self.root.join("toolkit").join("prompts").join(template_set)
    }

    /// `<root>/manuscript/chapters/chXX`
    pub fn chapter_dir(&self, chapter_num: u32) -> PathBuf {
        self.manuscript_root()
            .join("chapters")
            .join(BeatIds::chapter_id_for(chapter_num))
    }

    /// Scene outline file for a chapter/scene pair.
    pub fn scene_file(&self, chapter_num: u32, scene_num: u32) -> PathBuf {
        self.chapter_dir(chapter_num)
            .join("scenes")
            .join(format!("{}.md", BeatIds::scene_id_for(scene_num)))
    }

    /// Beat output file for a chapter/scene/beat triple.
    pub fn beat_file(&self, chapter_num: u32, scene_num: u32, beat_num: u32) -> PathBuf {
        self.chapter_dir(chapter_num).join("beats").join(format!(
            "{}_{}.md",
            BeatIds::scene_id_for(scene_num),
            BeatIds::beat_id_for(beat_num)
        ))
    }
}

/// Numeric and zero-padded identifiers of one beat.
///
/// # Examples
///
/// ```
/// use fabula_core::BeatIds;
///
/// let ids = BeatIds::new(1, 2, 3);
/// assert_eq!(ids.chapter_id(), "ch01");
/// assert_eq!(ids.scene_id(), "sc02");
/// assert_eq!(ids.beat_id(), "b03");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeatIds {
    /// Chapter number (1-based)
    pub chapter_num: u32,
    /// Scene number within the chapter (1-based)
    pub scene_num: u32,
    /// Beat number within the scene (1-based)
    pub beat_num: u32,
    chapter_id: String,
    scene_id: String,
    beat_id: String,
}

impl BeatIds {
    /// Creates identifiers for a beat.
    pub fn new(chapter_num: u32, scene_num: u32, beat_num: u32) -> Self {
        Self {
            chapter_num,
            scene_num,
            beat_num,
            chapter_id: Self::chapter_id_for(chapter_num),
            scene_id: Self::scene_id_for(scene_num),
            beat_id: Self::beat_id_for(beat_num),
        }
    }

    /// `chXX`
    pub fn chapter_id(&self) -> &str {
        &self.chapter_id
    }

    /// `scYY`
    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    /// `bZZ`
    pub fn beat_id(&self) -> &str {
        &self.beat_id
    }

    pub(crate) fn chapter_id_for(n: u32) -> String {
        format!("ch{n:02}")
    }

    pub(crate) fn scene_id_for(n: u32) -> String {
        format!("sc{n:02}")
    }

    pub(crate) fn beat_id_for(n: u32) -> String {
        format!("b{n:02}")
    }
}
