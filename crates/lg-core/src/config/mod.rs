//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Fallbacks for empty values (product name, timeouts) are applied by the
//! bootstrap wiring, not here.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Product name used in the client identifier header and artifact names.
    /// May be empty.
    pub product_name: String,

    /// Base URL of the remote service (trust, flag source, manifest).
    /// 远端服务基础地址（可能为空）
    pub remote_base_url: String,

    /// Upper bound for every JSON remote call, in seconds. 0 means "unset".
    pub request_timeout_secs: u64,

    /// Upper bound for a single read while streaming a download, in seconds.
    pub download_read_timeout_secs: u64,

    /// Key-value store file path (path info only, no existence check)
    /// 键值存储文件路径（仅路径信息，不检查文件是否存在）
    pub store_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys map to empty values. Negative integers are clamped to 0.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            product_name: toml_value
                .get("general")
                .and_then(|g| g.get("product_name"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            remote_base_url: toml_value
                .get("remote")
                .and_then(|r| r.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: toml_value
                .get("remote")
                .and_then(|r| r.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            download_read_timeout_secs: toml_value
                .get("remote")
                .and_then(|r| r.get("download_read_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            store_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("store_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            product_name: String::new(),
            remote_base_url: String::new(),
            request_timeout_secs: 0,
            download_read_timeout_secs: 0,
            store_path: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    /// 生产环境使用：创建具有系统默认路径的 AppConfig
    ///
    /// `data_dir` is computed by the caller (e.g. via the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            store_path: data_dir.join("store.json"),
            ..Self::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_str = r#"
            [general]
            # product_name is missing
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [general]
            product_name = "Launchgate"

            [remote]
            base_url = "https://updates.test"
            request_timeout_secs = 15
            download_read_timeout_secs = 45

            [storage]
            store_path = "/var/lib/launchgate/store.json"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.product_name, "Launchgate");
        assert_eq!(config.remote_base_url, "https://updates.test");
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.download_read_timeout_secs, 45);
        assert_eq!(
            config.store_path,
            PathBuf::from("/var/lib/launchgate/store.json")
        );
    }

    #[test]
    fn test_from_toml_clamps_negative_timeouts() {
        let toml_str = r#"
            [remote]
            request_timeout_secs = -5
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.request_timeout_secs, 0);
    }

    #[test]
    fn test_with_system_defaults_builds_store_path() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/test"));

        assert_eq!(config.store_path, PathBuf::from("/tmp/test/store.json"));
        assert_eq!(config.product_name, "");
        assert_eq!(config.request_timeout_secs, 0);
    }
}
