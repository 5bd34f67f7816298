//! Streaming artifact download.
//!
//! 下载流程：写入 `<target>.part`，完整成功后重命名；失败或取消时删除部分文件。

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use lg_core::{ports::ArtifactDownloaderPort, update::partial_path, DownloadError};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::remote_client::{map_transport_error, HttpClientConfig};

pub struct ReqwestArtifactDownloader {
    client: reqwest::Client,
    read_timeout: Duration,
}

impl ReqwestArtifactDownloader {
    pub fn new(config: &HttpClientConfig) -> Result<Self, DownloadError> {
        // No whole-request timeout: large artifacts are bounded per chunk.
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.request_timeout)
            .build()
            .map_err(|e| DownloadError::Transport(format!("build HTTP client failed: {e}")))?;
        Ok(Self {
            client,
            read_timeout: config.download_read_timeout,
        })
    }

    async fn transfer(
        &self,
        url: &str,
        part: &Path,
        cancel: &CancellationToken,
    ) -> Result<u64, DownloadError> {
        let send = tokio::time::timeout(self.read_timeout, self.client.get(url).send());
        let mut response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
            result = send => match result {
                Err(_) => return Err(DownloadError::Timeout),
                Ok(result) => result.map_err(map_download_error)?,
            },
        };

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status(status.as_u16()));
        }
        if let Some(len) = response.content_length() {
            debug!(len, "artifact content length");
        }

        let mut file = fs::File::create(part)
            .await
            .map_err(|e| DownloadError::Io(format!("create {} failed: {e}", part.display())))?;

        let mut written: u64 = 0;
        loop {
            let next = tokio::time::timeout(self.read_timeout, response.chunk());
            let chunk = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
                result = next => match result {
                    Err(_) => return Err(DownloadError::Timeout),
                    Ok(result) => result.map_err(map_download_error)?,
                },
            };
            let Some(chunk) = chunk else {
                break;
            };
            file.write_all(&chunk)
                .await
                .map_err(|e| DownloadError::Io(e.to_string()))?;
            written += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| DownloadError::Io(e.to_string()))?;
        file.sync_all()
            .await
            .map_err(|e| DownloadError::Io(e.to_string()))?;
        Ok(written)
    }
}

#[async_trait]
impl ArtifactDownloaderPort for ReqwestArtifactDownloader {
    async fn download(
        &self,
        url: &str,
        target: &Path,
        cancel: &CancellationToken,
    ) -> Result<u64, DownloadError> {
        let part = partial_path(target);

        let result = match self.transfer(url, &part, cancel).await {
            Ok(written) => fs::rename(&part, target)
                .await
                .map(|()| written)
                .map_err(|e| {
                    DownloadError::Io(format!(
                        "rename {} -> {} failed: {e}",
                        part.display(),
                        target.display()
                    ))
                }),
            Err(e) => Err(e),
        };

        match &result {
            Ok(written) => info!(bytes = written, target = %target.display(), "artifact saved"),
            Err(e) => {
                warn!(error = %e, "artifact download failed, removing partial file");
                remove_partial(&part).await;
            }
        }
        result
    }
}

async fn remove_partial(part: &Path) {
    match fs::remove_file(part).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %part.display(), error = %e, "failed to remove partial download"),
    }
}

fn map_download_error(error: reqwest::Error) -> DownloadError {
    if error.is_timeout() {
        DownloadError::Timeout
    } else {
        DownloadError::Transport(map_transport_error(error).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::user_agent;
    use mockito::Server;
    use tempfile::TempDir;

    fn downloader() -> ReqwestArtifactDownloader {
        ReqwestArtifactDownloader::new(&HttpClientConfig {
            user_agent: user_agent("Launchgate", "1.0.0"),
            request_timeout: Duration::from_secs(5),
            download_read_timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn writes_target_and_leaves_no_partial() {
        let mut server = Server::new_async().await;
        let payload: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
        let mock = server
            .mock("GET", "/files/app.exe")
            .match_header("user-agent", "Launchgate/1.0.0")
            .with_status(200)
            .with_body(payload.clone())
            .create_async()
            .await;
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("app.exe");

        let written = downloader()
            .download(
                &format!("{}/files/app.exe", server.url()),
                &target,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(written, payload.len() as u64);
        assert_eq!(std::fs::read(&target).unwrap(), payload);
        assert!(!partial_path(&target).exists());
    }

    #[tokio::test]
    async fn error_status_leaves_nothing_on_disk() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/files/missing")
            .with_status(404)
            .create_async()
            .await;
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("app.exe");

        let result = downloader()
            .download(
                &format!("{}/files/missing", server.url()),
                &target,
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(result, Err(DownloadError::Status(404)));
        assert!(!target.exists());
        assert!(!partial_path(&target).exists());
    }

    #[tokio::test]
    async fn cancelled_download_leaves_nothing_on_disk() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/files/app.exe")
            .with_status(200)
            .with_body("bytes")
            .create_async()
            .await;
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("app.exe");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = downloader()
            .download(&format!("{}/files/app.exe", server.url()), &target, &cancel)
            .await;

        assert_eq!(result, Err(DownloadError::Cancelled));
        assert!(!target.exists());
        assert!(!partial_path(&target).exists());
    }
}
