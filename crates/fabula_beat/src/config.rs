//! Beat generation configuration (`toolkit/config/beatgen.yaml`).

use fabula_core::StoryLayout;
use fabula_error::{ConfigError, FabulaResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File name under `toolkit/config/`.
const BEATGEN_FILE: &str = "beatgen.yaml";

fn enabled() -> bool {
    true
}

/// Which kinds of context feed the beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ContextRules {
    /// Include outline context
    #[serde(default = "enabled")]
    include_outline: bool,
    /// Include thread cards
    #[serde(default = "enabled")]
    include_threads: bool,
    /// Include character cards (and so a POV)
    #[serde(default = "enabled")]
    include_characters: bool,
    /// Include location cards
    #[serde(default = "enabled")]
    include_locations: bool,
}

impl Default for ContextRules {
    fn default() -> Self {
        Self {
            include_outline: true,
            include_threads: true,
            include_characters: true,
            include_locations: true,
        }
    }
}

/// Character-over-time behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct OverTimeConfig {
    /// Look up over-time cards for the scene's characters
    #[serde(default = "enabled")]
    use_over_time: bool,
}

impl Default for OverTimeConfig {
    fn default() -> Self {
        Self {
            use_over_time: true,
        }
    }
}

/// Thread handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ThreadConfig {
    /// Include thread cards at all
    #[serde(default = "enabled")]
    use_threads: bool,
    /// Hide thread truths revealed after the current chapter
    #[serde(default)]
    forbid_future_truths: bool,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            use_threads: true,
            forbid_future_truths: false,
        }
    }
}

/// Parameters passed through to prompts and the model call.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PromptParameters {
    /// Word target substituted as `TARGET_WORDS`
    #[serde(default)]
    target_words: Option<u32>,
    /// Per-call temperature override
    #[serde(default)]
    temperature: Option<f32>,
    /// Per-call max token override
    #[serde(default)]
    max_tokens: Option<u32>,
}

impl PromptParameters {
    /// Creates prompt parameters.
    pub fn new(target_words: Option<u32>, temperature: Option<f32>, max_tokens: Option<u32>) -> Self {
        Self {
            target_words,
            temperature,
            max_tokens,
        }
    }
}

/// Beat generation configuration. Every section is optional.
///
/// # Examples
///
/// ```
/// use fabula_beat::BeatgenConfig;
///
/// let cfg = BeatgenConfig::from_yaml("prompt_parameters:\n  target_words: 250\n").unwrap();
/// assert_eq!(*cfg.prompt_parameters().target_words(), Some(250));
/// assert!(*cfg.context_rules().include_threads());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct BeatgenConfig {
    /// Context inclusion rules
    #[serde(default)]
    context_rules: ContextRules,
    /// Character-over-time settings
    #[serde(default)]
    character_over_time: OverTimeConfig,
    /// Thread settings
    #[serde(default)]
    threads: ThreadConfig,
    /// Prompt and sampling parameters
    #[serde(default)]
    prompt_parameters: PromptParameters,
}

impl BeatgenConfig {
    /// Parses configuration YAML. An empty document yields the defaults.
    pub fn from_yaml(text: &str) -> FabulaResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)
            .map_err(|e| ConfigError::parse(BEATGEN_FILE, e))?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let cfg = serde_yaml::from_value(value)
            .map_err(|e| ConfigError::invalid(BEATGEN_FILE, e))?;
        Ok(cfg)
    }

    /// Loads `toolkit/config/beatgen.yaml`, using defaults when it is absent.
    #[tracing::instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn load(layout: &StoryLayout) -> FabulaResult<Self> {
        let path = layout.config_file(BEATGEN_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "No beatgen config, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::read(&path, e))?;
        Self::from_yaml(&text)
    }

    /// Replaces the prompt parameters.
    pub fn with_prompt_parameters(mut self, params: PromptParameters) -> Self {
        self.prompt_parameters = params;
        self
    }
}
