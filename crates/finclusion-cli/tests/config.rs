//! Config file discovery and model source resolution.

use std::fs;
use std::path::{Path, PathBuf};

use finclusion_cli::config::{
    AppConfig, CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, MODEL_SHA256_ENV_VAR,
    ModelSource,
};
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write config");
    path
}

#[test]
fn explicit_config_resolves_relative_model_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        dir.path(),
        "custom.toml",
        "model_path = \"models/classifier.json\"\n",
    );

    let config = AppConfig::load_with(Some(&path), no_env, Path::new(".")).expect("load");
    assert_eq!(
        config.model_path,
        Some(dir.path().join("models/classifier.json"))
    );
    assert_eq!(config.model_sha256, None);
}

#[test]
fn absolute_model_path_is_kept() {
    let dir = TempDir::new().expect("temp dir");
    let model = dir.path().join("elsewhere.json");
    let body = format!("model_path = {:?}\n", model.display().to_string());
    let path = write_config(dir.path(), "custom.toml", &body);

    let config = AppConfig::from_file(&path).expect("load");
    assert_eq!(config.model_path, Some(model));
}

#[test]
fn implicit_config_is_read_from_working_directory() {
    let dir = TempDir::new().expect("temp dir");
    write_config(
        dir.path(),
        DEFAULT_CONFIG_FILE,
        &format!("model_sha256 = \"{}\"\n", "ab".repeat(32)),
    );

    let config = AppConfig::load_with(None, no_env, dir.path()).expect("load");
    assert_eq!(config.model_sha256, Some("ab".repeat(32)));
}

#[test]
fn missing_implicit_config_falls_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::load_with(None, no_env, dir.path()).expect("load");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn config_env_var_is_used_before_working_directory() {
    let dir = TempDir::new().expect("temp dir");
    write_config(dir.path(), DEFAULT_CONFIG_FILE, "model_path = \"cwd.json\"\n");
    let named = write_config(dir.path(), "env.toml", "model_path = \"env.json\"\n");
    let named_str = named.display().to_string();
    let env = |key: &str| (key == CONFIG_ENV_VAR).then(|| named_str.clone());

    let config = AppConfig::load_with(None, env, dir.path()).expect("load");
    assert_eq!(config.model_path, Some(dir.path().join("env.json")));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let error = AppConfig::load_with(Some(&missing), no_env, dir.path()).unwrap_err();
    assert!(matches!(error, ConfigError::Io { .. }));
    assert!(error.to_string().contains("absent.toml"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(dir.path(), "custom.toml", "model = \"typo.json\"\n");
    let error = AppConfig::from_file(&path).unwrap_err();
    assert!(matches!(error, ConfigError::Toml { .. }));
}

#[test]
fn digest_from_env_beats_config_file() {
    let config = AppConfig {
        model_path: None,
        model_sha256: Some("0".repeat(64)),
    };
    let env = |key: &str| (key == MODEL_SHA256_ENV_VAR).then(|| "f".repeat(64));

    let source = ModelSource::resolve_with(None, None, &config, env);
    assert_eq!(source.sha256, Some("f".repeat(64)));
}

#[test]
fn demo_config_points_at_bundled_model() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/finclusion.toml");
    let config = AppConfig::load_with(Some(&path), no_env, Path::new(".")).expect("load demo");
    let model_path = config.model_path.expect("model path");
    assert!(model_path.is_file(), "{}", model_path.display());
}
