//! Normalized lore cards.

use crate::split_front_matter;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

const KEY_ID: &str = "unique-id";
const KEY_NAMES: &str = "names";
const KEY_NAME: &str = "name";
const KEY_SUMMARY: &str = "summary";
const KEY_DESCRIPTION: &str = "description";
const KEY_CHAPTER_STATE: &str = "chapter_state";
const KEY_CHARACTER: &str = "character";
const KEY_DEFAULT_TONE: &str = "default_tone";

/// A single codex entry: typed fields the toolkit reads, plus every other
/// front matter key in `extra`.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Card {
    /// Identifying key (`unique-id`, else the file stem)
    id: String,
    /// Display name
    name: Option<String>,
    /// Markdown body
    body: String,
    /// Explicit summary, else the first non-empty body line
    summary: Option<String>,
    /// Long description
    description: Option<String>,
    /// State of the entity in the current chapter
    chapter_state: Option<String>,
    /// Character name a voice card belongs to
    character: Option<String>,
    /// Tone a style card asks for
    default_tone: Option<String>,
    /// Remaining front matter keys
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    extra: BTreeMap<String, Value>,
}

impl Card {
    /// Parses a markdown card, using `fallback_id` when it has no `unique-id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_codex::Card;
    ///
    /// let card = Card::from_markdown(
    ///     "---\nunique-id: [CHAR_MAYA]\nnames: [Maya Ortiz]\n---\n# Maya\n\nA cartographer.\n",
    ///     "maya",
    /// );
    /// assert_eq!(card.id(), "CHAR_MAYA");
    /// assert_eq!(card.name().as_deref(), Some("Maya Ortiz"));
    /// assert_eq!(card.summary().as_deref(), Some("# Maya"));
    /// ```
    pub fn from_markdown(text: &str, fallback_id: &str) -> Self {
        let parsed = split_front_matter(text);
        Self::from_parts(parsed.meta, parsed.body, fallback_id)
    }

    /// Normalizes parsed metadata and body into a card.
    pub fn from_parts(mut meta: Mapping, body: String, fallback_id: &str) -> Self {
        let id = meta
            .remove(KEY_ID)
            .as_ref()
            .and_then(identity)
            .unwrap_or_else(|| fallback_id.to_string());

        let names = meta.remove(KEY_NAMES);
        let name_field = meta.remove(KEY_NAME);
        let name = match names {
            Some(Value::Sequence(list)) if !list.is_empty() => {
                list.first().and_then(scalar).map(|s| s.trim().to_string())
            }
            _ => name_field.as_ref().and_then(scalar),
        };

        let summary = match meta.remove(KEY_SUMMARY) {
            Some(Value::Null) | None => first_content_line(&body),
            Some(value) => scalar(&value).or_else(|| first_content_line(&body)),
        };

        let mut take = |key: &str| meta.remove(key).as_ref().and_then(scalar);
        let description = take(KEY_DESCRIPTION);
        let chapter_state = take(KEY_CHAPTER_STATE);
        let character = take(KEY_CHARACTER);
        let default_tone = take(KEY_DEFAULT_TONE);

        let extra = meta
            .into_iter()
            .filter_map(|(k, v)| scalar(&k).map(|k| (k, v)))
            .collect();

        Self {
            id,
            name,
            body,
            summary,
            description,
            chapter_state,
            character,
            default_tone,
            extra,
        }
    }

    /// Name if present, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

fn identity(value: &Value) -> Option<String> {
    match value {
        Value::Sequence(list) => list.first().and_then(scalar),
        other => scalar(other),
    }
    .filter(|s| !s.is_empty())
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn first_content_line(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
