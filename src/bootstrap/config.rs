//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file into the [`AppConfig`] DTO. No validation and no
//! defaults here; fallbacks live in the wiring step.

use std::path::{Path, PathBuf};

use anyhow::Context;
use lg_core::config::AppConfig;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "LG_CONFIG";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `$LG_CONFIG` if set and non-empty, otherwise `default_path`.
pub fn resolve_config_path(default_path: &Path) -> PathBuf {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => default_path.to_path_buf(),
    }
}

/// Load the file at `config_path`, or fall back to system defaults rooted
/// at `data_dir` when no file exists.
pub fn load_or_default(config_path: PathBuf, data_dir: PathBuf) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::with_system_defaults(data_dir));
    }
    let mut config = load_config(config_path)?;
    if config.store_path.as_os_str().is_empty() {
        config.store_path = AppConfig::with_system_defaults(data_dir).store_path;
    }
    Ok(config)
}
