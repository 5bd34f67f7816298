use std::path::PathBuf;

/// Resolved application directories.
///
/// 应用目录（纯事实容器）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Durable per-install data (key-value store, logs, config).
    pub app_data_root: PathBuf,
    /// Platform temporary-files location used for downloaded artifacts.
    pub temp_root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn app_dirs_is_pure_fact_container() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/launchgate"),
            temp_root: PathBuf::from("/tmp"),
        };
        assert!(dirs.app_data_root.ends_with("launchgate"));
        assert!(dirs.temp_root.ends_with("tmp"));
    }
}
