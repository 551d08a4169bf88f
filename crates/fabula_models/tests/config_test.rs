use fabula_error::ModelsErrorKind;
use fabula_models::{ModelConfig, OpenAICompatibleClient};
use std::fs;

const MODEL_YAML: &str = "\
provider: openai-compatible
base_url: http://localhost:8080/v1
model: tide-70b
api_key_env: FABULA_TEST_KEY_NEVER_SET_7F3A
timeout_seconds: 30
default_params:
  temperature: 0.85
  top_p: 0.95
  max_tokens: 1024
  presence_penalty: 0.2
";

#[test]
fn parses_full_model_config() {
    let cfg = ModelConfig::from_yaml_str(MODEL_YAML).expect("config");
    assert_eq!(cfg.model(), "tide-70b");
    assert_eq!(*cfg.timeout_seconds(), 30);
    assert_eq!(cfg.endpoint(), "http://localhost:8080/v1/chat/completions");
    assert_eq!(*cfg.default_params().max_tokens(), Some(1024));
    assert_eq!(*cfg.default_params().top_p(), Some(0.95));
    assert!(cfg.default_params().extra().contains_key("presence_penalty"));
}

#[test]
fn defaults_apply_when_fields_are_absent() {
    let cfg = ModelConfig::from_yaml_str("model: gpt-4o-mini\n").expect("config");
    assert_eq!(cfg.provider(), "openai-compatible");
    assert_eq!(cfg.api_key_env(), "OPENAI_API_KEY");
    assert_eq!(cfg.endpoint(), "https://api.openai.com/v1/chat/completions");
    assert_eq!(*cfg.default_params().temperature(), None);
}

#[test]
fn model_is_required() {
    assert!(ModelConfig::from_yaml_str("base_url: http://x\n").is_err());
}

#[test]
fn load_reads_story_model_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_dir = dir.path().join("toolkit/config");
    fs::create_dir_all(&config_dir).expect("mkdir");
    fs::write(config_dir.join("model.yaml"), MODEL_YAML).expect("write");

    let cfg = ModelConfig::load(dir.path()).expect("config");
    assert_eq!(cfg.api_key_env(), "FABULA_TEST_KEY_NEVER_SET_7F3A");
}

#[test]
fn missing_credential_names_the_variable() {
    let cfg = ModelConfig::from_yaml_str(MODEL_YAML).expect("config");

    let err = OpenAICompatibleClient::from_config(&cfg).unwrap_err();
    assert_eq!(
        err.kind,
        ModelsErrorKind::MissingCredential("FABULA_TEST_KEY_NEVER_SET_7F3A".to_string())
    );
    assert!(err.to_string().contains("FABULA_TEST_KEY_NEVER_SET_7F3A"));
}

#[test]
fn explicit_key_builds_client() {
    let cfg = ModelConfig::from_yaml_str(MODEL_YAML).expect("config");
    let client = OpenAICompatibleClient::new("sk-test", &cfg).expect("client");
    assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
}
