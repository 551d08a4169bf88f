//! Prompt templates and action wiring (`toolkit/config/prompting.yaml`).
//!
//! ```yaml
//! actions:
//!   ACTIONS_WRITE_BEAT:
//!     template_set: nc/beat
//!     slots:
//!       - { slot: system, role: system, required: true }
//!       - { slot: user, role: user, required: true }
//!       - { slot: user2, role: user }
//! ```

use crate::PromptBlocks;
use fabula_core::{Message, Role, StoryLayout};
use fabula_error::{ConfigError, FabulaResult, PromptError, PromptErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Action that writes a single beat.
pub const ACTION_WRITE_BEAT: &str = "ACTIONS_WRITE_BEAT";

const PROMPTING_FILE: &str = "prompting.yaml";
const STANDARD_SLOTS: [&str; 3] = ["system", "user", "user2"];

/// One template slot of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SlotConfig {
    /// Slot name, which also selects the template file
    slot: String,
    /// Chat role of the rendered text
    role: Role,
    /// Whether a missing template file is an error
    #[serde(default)]
    required: bool,
}

/// Template set and slots for one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ActionConfig {
    /// Directory under `toolkit/prompts/`
    template_set: String,
    /// Slots in render order
    #[serde(default)]
    slots: Vec<SlotConfig>,
}

/// Every configured action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct PromptingConfig {
    /// Action key to configuration
    #[serde(default)]
    actions: BTreeMap<String, ActionConfig>,
}

impl PromptingConfig {
    /// Parses prompting configuration YAML.
    pub fn from_yaml(text: &str) -> FabulaResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)
            .map_err(|e| ConfigError::parse(PROMPTING_FILE, e))?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let cfg = serde_yaml::from_value(value)
            .map_err(|e| ConfigError::invalid(PROMPTING_FILE, e))?;
        Ok(cfg)
    }

    /// Loads `toolkit/config/prompting.yaml`.
    ///
    /// # Errors
    ///
    /// Unlike the other configuration files, a missing prompting file is an
    /// error.
    #[tracing::instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn load(layout: &StoryLayout) -> FabulaResult<Self> {
        let path = layout.config_file(PROMPTING_FILE);
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::read(&path, e))?;
        Self::from_yaml(&text)
    }

    /// Looks up an action.
    ///
    /// # Errors
    ///
    /// Unknown actions fail with an error listing every known action.
    pub fn action(&self, action_key: &str) -> FabulaResult<&ActionConfig> {
        self.actions.get(action_key).ok_or_else(|| {
            PromptError::new(PromptErrorKind::UnknownAction {
                action: action_key.to_string(),
                available: self.actions.keys().cloned().collect(),
            })
            .into()
        })
    }
}

/// Rendered text for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RenderedPrompt {
    /// Slot name
    slot: String,
    /// Chat role the slot was configured with
    role: Role,
    /// Template text after substitution
    text: String,
}

/// Rendered slots of one action, in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RenderedPrompts {
    /// Action key
    action: String,
    /// Rendered slots; optional slots without a template are absent
    prompts: Vec<RenderedPrompt>,
}

impl RenderedPrompts {
    /// Rendered text of a slot.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.prompts
            .iter()
            .find(|p| p.slot == slot)
            .map(|p| p.text.as_str())
    }

    /// Rendered text of a slot the caller cannot do without.
    pub fn require(&self, slot: &str) -> FabulaResult<&str> {
        self.get(slot).ok_or_else(|| {
            PromptError::new(PromptErrorKind::MissingSlot {
                action: self.action.clone(),
                slot: slot.to_string(),
            })
            .into()
        })
    }
}

/// Template file name for a slot.
///
/// # Examples
///
/// ```
/// use fabula_beat::slot_file_name;
///
/// assert_eq!(slot_file_name("system"), "system_message.txt");
/// assert_eq!(slot_file_name("user2"), "user_2.txt");
/// assert_eq!(slot_file_name("recap"), "recap.txt");
/// ```
pub fn slot_file_name(slot: &str) -> String {
    match slot {
        "system" => "system_message.txt".to_string(),
        "user" => "user.txt".to_string(),
        "user2" => "user_2.txt".to_string(),
        other => format!("{}.txt", other),
    }
}

/// Replaces every `{{NAME}}` with the block of that name.
///
/// Placeholders without a block are left untouched.
///
/// # Examples
///
/// ```
/// use fabula_beat::{PromptBlocks, render_template};
///
/// let blocks: PromptBlocks = [("TARGET_WORDS", "400")].into_iter().collect();
/// assert_eq!(
///     render_template("Write {{TARGET_WORDS}} words. {{OTHER}}", &blocks),
///     "Write 400 words. {{OTHER}}"
/// );
/// ```
pub fn render_template(template: &str, blocks: &PromptBlocks) -> String {
    blocks
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{{{}}}}}", name), value)
        })
}

fn render_template_file(path: &Path, blocks: &PromptBlocks) -> FabulaResult<String> {
    let template = std::fs::read_to_string(path).map_err(|e| {
        PromptError::new(PromptErrorKind::TemplateRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    Ok(render_template(&template, blocks))
}

/// Renders the slots `action_key` declares in `prompting.yaml`.
///
/// # Errors
///
/// - Missing or unparseable `prompting.yaml`
/// - Unknown action
/// - Required slot without a template file
#[tracing::instrument(skip(story_root, blocks), fields(root = %story_root.as_ref().display()))]
pub fn render_prompts_for_action(
    story_root: impl AsRef<Path>,
    action_key: &str,
    blocks: &PromptBlocks,
) -> FabulaResult<RenderedPrompts> {
    let layout = StoryLayout::new(story_root.as_ref());
    let cfg = PromptingConfig::load(&layout)?;
    let action = cfg.action(action_key)?;
    let dir = layout.template_set_dir(action.template_set());

    let mut prompts = Vec::with_capacity(action.slots().len());
    for slot in action.slots() {
        let path = dir.join(slot_file_name(slot.slot()));
        if !path.is_file() {
            if *slot.required() {
                return Err(PromptError::new(PromptErrorKind::TemplateNotFound {
                    slot: slot.slot().clone(),
                    path: path.display().to_string(),
                })
                .into());
            }
            debug!(slot = %slot.slot(), path = %path.display(), "Skipping optional slot");
            continue;
        }
        prompts.push(RenderedPrompt {
            slot: slot.slot().clone(),
            role: *slot.role(),
            text: render_template_file(&path, blocks)?,
        });
    }

    debug!(rendered = prompts.len(), "Rendered prompts");
    Ok(RenderedPrompts {
        action: action_key.to_string(),
        prompts,
    })
}

/// Renders whichever standard templates (`system`, `user`, `user2`) exist in a
/// template set, keyed by slot name.
#[tracing::instrument(skip(story_root, blocks), fields(root = %story_root.as_ref().display()))]
pub fn render_template_set(
    story_root: impl AsRef<Path>,
    template_set: &str,
    blocks: &PromptBlocks,
) -> FabulaResult<BTreeMap<String, String>> {
    let dir = StoryLayout::new(story_root.as_ref()).template_set_dir(template_set);
    let mut rendered = BTreeMap::new();
    for slot in STANDARD_SLOTS {
        let path = dir.join(slot_file_name(slot));
        if path.is_file() {
            rendered.insert(slot.to_string(), render_template_file(&path, blocks)?);
        }
    }
    Ok(rendered)
}

/// Builds chat messages: system, user, and `user2` when it is not blank.
///
/// # Examples
///
/// ```
/// use fabula_beat::build_messages_from_prompts;
///
/// assert_eq!(build_messages_from_prompts("s", "u", Some("  ")).len(), 2);
/// assert_eq!(build_messages_from_prompts("s", "u", Some("go")).len(), 3);
/// ```
pub fn build_messages_from_prompts(system: &str, user: &str, user2: Option<&str>) -> Vec<Message> {
    let mut messages = vec![Message::system(system), Message::user(user)];
    if let Some(extra) = user2.filter(|text| !text.trim().is_empty()) {
        messages.push(Message::user(extra));
    }
    messages
}
