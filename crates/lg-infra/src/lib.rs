//! Infrastructure adapters for Launchgate.

pub mod network;
pub mod store;

pub use network::{user_agent, HttpClientConfig, ReqwestArtifactDownloader, ReqwestRemoteClient};
pub use store::JsonFileStore;
