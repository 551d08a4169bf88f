//! Environment overrides for the model configuration.
//!
//! Kept in its own test binary so no other test observes the variables.

use fabula_models::ModelConfig;
use std::fs;

#[test]
fn single_underscore_prefix_overrides_model_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_dir = dir.path().join("toolkit/config");
    fs::create_dir_all(&config_dir).expect("mkdir");
    fs::write(
        config_dir.join("model.yaml"),
        "model: from-file\ndefault_params:\n  temperature: 0.9\n",
    )
    .expect("write");

    // SAFETY: this is the only test in this binary.
    unsafe {
        std::env::set_var("FABULA_MODEL", "from-env");
        std::env::set_var("FABULA_BASE_URL", "http://127.0.0.1:9/v1");
        std::env::set_var("FABULA_DEFAULT_PARAMS__TEMPERATURE", "0.25");
    }

    let cfg = ModelConfig::load(dir.path());

    unsafe {
        std::env::remove_var("FABULA_MODEL");
        std::env::remove_var("FABULA_BASE_URL");
        std::env::remove_var("FABULA_DEFAULT_PARAMS__TEMPERATURE");
    }

    let cfg = cfg.expect("config");
    assert_eq!(cfg.model(), "from-env");
    assert_eq!(cfg.endpoint(), "http://127.0.0.1:9/v1/chat/completions");
    assert_eq!(*cfg.default_params().temperature(), Some(0.25));
}
