//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for use-case construction.
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;
use lg_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Storage dependencies / 存储依赖
    pub store: Arc<dyn KeyValueStorePort>,

    // Network dependencies / 网络依赖
    pub remote: Arc<dyn RemoteClientPort>,
    pub downloader: Arc<dyn ArtifactDownloaderPort>,

    // UI dependencies / UI 依赖
    pub prompt: Arc<dyn UserPromptPort>,
    pub window: Arc<dyn WindowPort>,

    // System dependencies / 系统依赖
    pub installer: Arc<dyn InstallerPort>,
    pub lifecycle: Arc<dyn AppLifecyclePort>,
}
