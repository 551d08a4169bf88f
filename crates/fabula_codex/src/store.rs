//! Card store over a story's codex folder.

use crate::{Card, CardSet, CardType, CodexIndex};
use fabula_core::StoryLayout;
use fabula_error::FabulaResult;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Suffix that marks a character-over-time card id.
pub const OVER_TIME_SUFFIX: &str = "_OVER_TIME";

/// Style card preferred over all others.
pub const PROJECT_DEFAULT_STYLE: &str = "STYLE_PROJECT_DEFAULT";

/// Read access to the cards of one story.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct CodexStore {
    /// Story layout
    layout: StoryLayout,
    /// Type key to folder mapping
    index: CodexIndex,
}

impl CodexStore {
    /// Opens the codex of the story at `story_root`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `codex/index.yaml` exists but cannot be
    /// read or parsed.
    pub fn open(story_root: impl AsRef<Path>) -> FabulaResult<Self> {
        Self::from_layout(StoryLayout::new(story_root.as_ref()))
    }

    /// Opens the codex described by `layout`.
    pub fn from_layout(layout: StoryLayout) -> FabulaResult<Self> {
        let index = CodexIndex::load(&layout)?;
        Ok(Self { layout, index })
    }

    /// Loads every card of a type key, ordered by file name.
    ///
    /// Unknown types, types without a folder and missing folders yield an
    /// empty set. Unreadable files are skipped.
    #[tracing::instrument(skip(self))]
    pub fn load_cards(&self, type_key: &str) -> CardSet {
        let Some(folder) = self.index.folder_for(type_key) else {
            debug!("Type has no folder in codex index");
            return CardSet::new();
        };
        let dir = self.layout.codex_root().join(folder);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Card folder unavailable");
                return CardSet::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut cards = CardSet::new();
        for path in paths {
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable card");
                    continue;
                }
            };
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            cards.insert(Card::from_markdown(&text, &stem));
        }
        debug!(count = cards.len(), "Loaded cards");
        cards
    }

    /// Loads every card of a known type.
    pub fn cards(&self, card_type: CardType) -> CardSet {
        self.load_cards(card_type.as_ref())
    }

    /// Character cards relevant to a scene. Currently every character card.
    pub fn characters_for_scene(&self, _scene_text: &str) -> CardSet {
        self.cards(CardType::Char)
    }

    /// Location cards relevant to a scene. Currently every location card.
    pub fn locations_for_scene(&self, _scene_text: &str) -> CardSet {
        self.cards(CardType::Loc)
    }

    /// Every thread card.
    pub fn threads(&self) -> CardSet {
        self.cards(CardType::Thread)
    }

    /// Over-time cards keyed by base character id, restricted to `character_ids`.
    ///
    /// A card maps to a base id only when its own id ends with `_OVER_TIME`.
    /// When two cards map to the same base id, the later file wins.
    #[tracing::instrument(skip(self))]
    pub fn characters_over_time(&self, character_ids: &[String]) -> BTreeMap<String, Card> {
        let mut by_base: BTreeMap<String, Card> = BTreeMap::new();
        for card in self.cards(CardType::CharOvertime) {
            match card.id().strip_suffix(OVER_TIME_SUFFIX) {
                Some(base) if !base.is_empty() => {
                    by_base.insert(base.to_string(), card);
                }
                _ => debug!(id = %card.id(), "Over-time card id lacks suffix"),
            }
        }
        by_base.retain(|base, _| character_ids.iter().any(|id| id == base));
        by_base
    }

    /// The project style guide: `STYLE_PROJECT_DEFAULT` if present, else the
    /// first style card.
    pub fn style_guide(&self) -> Option<Card> {
        let styles = self.cards(CardType::Style);
        styles
            .get(PROJECT_DEFAULT_STYLE)
            .or_else(|| styles.first())
            .cloned()
    }

    /// Voice guide for a POV character id.
    ///
    /// Resolves the character's name from the character cards, then defers to
    /// [`CodexStore::voice_for_name`].
    #[tracing::instrument(skip(self))]
    pub fn pov_voice(&self, pov_char_id: &str) -> Option<Card> {
        let characters = self.cards(CardType::Char);
        let name = characters.get(pov_char_id).and_then(|c| c.name().clone());
        self.voice_for_name(name.as_deref())
    }

    /// Voice card whose `character` equals `name`, else the first voice card.
    pub fn voice_for_name(&self, name: Option<&str>) -> Option<Card> {
        let voices = self.cards(CardType::Voice);
        name.filter(|n| !n.is_empty())
            .and_then(|n| voices.iter().find(|v| v.character().as_deref() == Some(n)))
            .or_else(|| voices.first())
            .cloned()
    }
}
