use std::path::Path;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::DownloadError;

/// Streams a remote resource to a local file.
///
/// 下载端口：先写入 `<target>.part`，仅在完整成功后重命名为 `target`。
#[async_trait]
pub trait ArtifactDownloaderPort: Send + Sync {
    /// Download `url` into `target`, returning the number of bytes written.
    ///
    /// On any error (including cancellation) `target` does not exist
    /// afterwards and the partial file handle has been released.
    async fn download(
        &self,
        url: &str,
        target: &Path,
        cancel: &CancellationToken,
    ) -> Result<u64, DownloadError>;
}
