//! # Application Context / 应用上下文
//!
//! Explicit per-process values handed to every use case instead of
//! module-level globals: running version, endpoints, download location, the
//! shutdown cancellation token and the single-flight registry.

use std::path::PathBuf;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::single_flight::SingleFlight;

const TRUST_CHECK_PATH: &str = "/user/check";
const FLAG_SOURCE_PATH: &str = "/app/get/data";
const UPDATE_MANIFEST_PATH: &str = "/app/get/update";

/// Fully resolved remote endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoints {
    pub trust_check: String,
    pub flag_source: String,
    pub update_manifest: String,
}

impl RemoteEndpoints {
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            trust_check: format!("{base}{TRUST_CHECK_PATH}"),
            flag_source: format!("{base}{FLAG_SOURCE_PATH}"),
            update_manifest: format!("{base}{UPDATE_MANIFEST_PATH}"),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    /// Version string of the running client, compared verbatim with the manifest.
    pub running_version: String,
    /// Product name used for artifact file names.
    pub product_name: String,
    pub endpoints: RemoteEndpoints,
    /// Platform temporary-files location for downloaded artifacts.
    pub downloads_dir: PathBuf,
    /// Cancelled on process shutdown; aborts in-flight downloads.
    pub shutdown: CancellationToken,
    pub single_flight: Arc<SingleFlight>,
}

impl AppContext {
    pub fn new(
        running_version: impl Into<String>,
        product_name: impl Into<String>,
        endpoints: RemoteEndpoints,
        downloads_dir: PathBuf,
    ) -> Self {
        Self {
            running_version: running_version.into(),
            product_name: product_name.into(),
            endpoints,
            downloads_dir,
            shutdown: CancellationToken::new(),
            single_flight: Arc::new(SingleFlight::new()),
        }
    }
}
