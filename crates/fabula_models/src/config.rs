//! Model configuration (`toolkit/config/model.yaml`).

use config::{Config, Environment, File, FileFormat};
use fabula_core::StoryLayout;
use fabula_error::{ConfigError, FabulaResult, ModelsError, ModelsErrorKind, ModelsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Endpoint base used when `base_url` is not configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Credential variable used when `api_key_env` is not configured.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

const MODEL_FILE: &str = "model.yaml";
const ENV_PREFIX: &str = "FABULA";

fn default_provider() -> String {
    "openai-compatible".to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

/// Sampling parameters sent with every request unless overridden per call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct DefaultParams {
    /// Sampling temperature
    #[serde(default)]
    temperature: Option<f32>,
    /// Nucleus sampling cutoff
    #[serde(default)]
    top_p: Option<f32>,
    /// Maximum completion tokens
    #[serde(default)]
    max_tokens: Option<u32>,
    /// Any other request parameters, passed through verbatim
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

/// Connection and sampling settings for the completion endpoint.
///
/// # Examples
///
/// ```
/// use fabula_models::ModelConfig;
///
/// let cfg = ModelConfig::from_yaml_str("model: tide-70b\nbase_url: http://localhost:8080/v1/\n").unwrap();
/// assert_eq!(cfg.endpoint(), "http://localhost:8080/v1/chat/completions");
/// assert_eq!(cfg.api_key_env(), "OPENAI_API_KEY");
/// assert_eq!(*cfg.timeout_seconds(), 120);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ModelConfig {
    /// Provider label, informational
    #[serde(default = "default_provider")]
    provider: String,
    /// API base URL
    #[serde(default)]
    base_url: Option<String>,
    /// Model identifier
    model: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    api_key_env: String,
    /// HTTP timeout
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
    /// Default sampling parameters
    #[serde(default)]
    default_params: DefaultParams,
}

impl ModelConfig {
    /// Loads `toolkit/config/model.yaml` under `story_root`, then applies
    /// `FABULA_*` environment overrides (`FABULA_MODEL`, `FABULA_BASE_URL`,
    /// `FABULA_DEFAULT_PARAMS__TEMPERATURE`, ...).
    ///
    /// # Errors
    ///
    /// Fails when the merged sources cannot be parsed or lack `model`.
    #[instrument(skip(story_root), fields(root = %story_root.as_ref().display()))]
    pub fn load(story_root: impl AsRef<Path>) -> FabulaResult<Self> {
        let path = StoryLayout::new(story_root.as_ref()).config_file(MODEL_FILE);
        debug!(path = %path.display(), "Loading model configuration");

        let builder = Config::builder()
            .add_source(File::from(path.as_path()).format(FileFormat::Yaml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::finish(builder)
    }

    /// Parses model configuration from YAML text, without environment overrides.
    pub fn from_yaml_str(text: &str) -> FabulaResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(text, FileFormat::Yaml)))
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> FabulaResult<Self> {
        let cfg: Self = builder
            .build()
            .map_err(|e| ConfigError::parse(MODEL_FILE, e))?
            .try_deserialize()
            .map_err(|e| ConfigError::invalid(MODEL_FILE, e))?;
        debug!(provider = %cfg.provider, model = %cfg.model, "Model configuration ready");
        Ok(cfg)
    }

    /// Full `/chat/completions` URL.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    /// Reads the API key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Fails, naming the variable, when it is unset or empty.
    pub fn resolve_api_key(&self) -> ModelsResult<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ModelsError::new(ModelsErrorKind::MissingCredential(
                self.api_key_env.clone(),
            ))),
        }
    }
}
