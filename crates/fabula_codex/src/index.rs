//! Codex index (`codex/index.yaml`).

use crate::CardType;
use fabula_core::StoryLayout;
use fabula_error::{ConfigError, FabulaResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::debug;

const INDEX_DOCUMENT: &str = "codex/index.yaml";

/// One entry under `types:`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct TypeEntry {
    /// Folder name relative to `codex/`
    #[serde(default)]
    folder: Option<String>,
}

impl TypeEntry {
    /// Entry pointing at `folder`.
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: Some(folder.into()),
        }
    }
}

/// Mapping from card type key to folder.
///
/// # Examples
///
/// ```
/// use fabula_codex::CodexIndex;
///
/// let index = CodexIndex::default();
/// assert_eq!(index.folder_for("CHAR"), Some("characters"));
/// assert_eq!(index.folder_for("UNKNOWN"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodexIndex {
    /// Type key to entry; null entries are kept so they can be reported as unset
    #[serde(default)]
    types: BTreeMap<String, Option<TypeEntry>>,
}

impl Default for CodexIndex {
    fn default() -> Self {
        let types = CardType::iter()
            .map(|t| (t.to_string(), Some(TypeEntry::new(t.default_folder()))))
            .collect();
        Self { types }
    }
}

impl CodexIndex {
    /// Parses index YAML. An empty document yields an index with no types.
    pub fn from_yaml(text: &str) -> FabulaResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)
            .map_err(|e| ConfigError::parse(INDEX_DOCUMENT, e))?;
        if value.is_null() {
            return Ok(Self {
                types: BTreeMap::new(),
            });
        }
        let index = serde_yaml::from_value(value)
            .map_err(|e| ConfigError::invalid(INDEX_DOCUMENT, e))?;
        Ok(index)
    }

    /// Loads `codex/index.yaml`, falling back to the default index when the
    /// file does not exist.
    #[tracing::instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn load(layout: &StoryLayout) -> FabulaResult<Self> {
        let path = layout.codex_index();
        if !path.exists() {
            debug!(path = %path.display(), "No codex index, using default folders");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::read(&path, e))?;
        let index = Self::from_yaml(&text)?;
        debug!(types = index.types.len(), "Loaded codex index");
        Ok(index)
    }

    /// Folder for a type key, if the type is declared with a non-empty folder.
    pub fn folder_for(&self, type_key: &str) -> Option<&str> {
        self.types
            .get(type_key)?
            .as_ref()?
            .folder
            .as_deref()
            .filter(|f| !f.is_empty())
    }
}
