//! HTTP adapters for the remote client and artifact downloader ports.

mod artifact_downloader;
mod remote_client;

pub use artifact_downloader::ReqwestArtifactDownloader;
pub use remote_client::{user_agent, HttpClientConfig, ReqwestRemoteClient};
