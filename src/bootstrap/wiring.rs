//! # Dependency Injection / 依赖注入模块
//!
//! Assembles the adapters from `lg-infra` and `lg-platform` behind their
//! ports and hands them to `lg-app`. This is the only place that depends on
//! all three crates at once. Assembly only, no decisions.

use std::sync::Arc;
use std::time::Duration;

use lg_app::{app_paths::AppPaths, AppContext, AppDeps, RemoteEndpoints, UseCases};
use lg_core::config::AppConfig;
use lg_infra::{
    user_agent, HttpClientConfig, JsonFileStore, ReqwestArtifactDownloader, ReqwestRemoteClient,
};
use lg_platform::{HeadlessWindow, ProcessLifecycle, SystemInstaller, TerminalPrompt};
use tracing::{info, warn};

pub const DEFAULT_PRODUCT_NAME: &str = "Launchgate";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_DOWNLOAD_READ_TIMEOUT: Duration = Duration::from_secs(60);

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Assembled application: use cases plus the concrete handles the binary
/// needs at shutdown.
pub struct WiredApp {
    pub usecases: UseCases,
    pub window: Arc<HeadlessWindow>,
    pub lifecycle: Arc<ProcessLifecycle>,
}

/// Config values with empty/zero entries replaced by built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub product_name: String,
    pub request_timeout: Duration,
    pub download_read_timeout: Duration,
}

impl EffectiveSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        let product_name = if config.product_name.trim().is_empty() {
            DEFAULT_PRODUCT_NAME.to_string()
        } else {
            config.product_name.clone()
        };
        Self {
            product_name,
            request_timeout: secs_or(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT),
            download_read_timeout: secs_or(
                config.download_read_timeout_secs,
                DEFAULT_DOWNLOAD_READ_TIMEOUT,
            ),
        }
    }
}

fn secs_or(secs: u64, default: Duration) -> Duration {
    if secs == 0 {
        default
    } else {
        Duration::from_secs(secs)
    }
}

pub fn wire_dependencies(
    config: &AppConfig,
    paths: &AppPaths,
    running_version: &str,
) -> WiringResult<WiredApp> {
    let settings = EffectiveSettings::from_config(config);
    if config.remote_base_url.is_empty() {
        warn!("remote.base_url is not configured; remote calls will fail");
    }

    let http = HttpClientConfig {
        user_agent: user_agent(&settings.product_name, running_version),
        request_timeout: settings.request_timeout,
        download_read_timeout: settings.download_read_timeout,
    };
    let remote = ReqwestRemoteClient::new(&http)
        .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;
    let downloader = ReqwestArtifactDownloader::new(&http)
        .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;

    let ctx = AppContext::new(
        running_version,
        settings.product_name.clone(),
        RemoteEndpoints::from_base_url(&config.remote_base_url),
        paths.downloads_dir.clone(),
    );

    let window = Arc::new(HeadlessWindow::new());
    let lifecycle = Arc::new(ProcessLifecycle::new(ctx.shutdown.clone()));

    let deps = AppDeps {
        store: Arc::new(JsonFileStore::new(config.store_path.clone())),
        remote: Arc::new(remote),
        downloader: Arc::new(downloader),
        prompt: Arc::new(TerminalPrompt::new()),
        window: window.clone(),
        installer: Arc::new(SystemInstaller::new()),
        lifecycle: lifecycle.clone(),
    };

    info!(
        product = %settings.product_name,
        version = running_version,
        store = %config.store_path.display(),
        "dependencies wired"
    );

    Ok(WiredApp {
        usecases: UseCases::new(ctx, deps),
        window,
        lifecycle,
    })
}
