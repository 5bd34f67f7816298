//! Error taxonomy shared by every layer.
//!
//! 错误分类：本地存储、远端信任、远端配置、更新检查、下载、文件系统、安装。
//!
//! Declining a prompt is not an error; it is a normal outcome of the update
//! state machine (see [`crate::update::UpdateOutcome`]).

use thiserror::Error;

/// Local persistence unavailable or corrupt.
///
/// Fatal to the calling operation, never to the process.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("stored value corrupt for key `{key}`: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("store serialization failed: {0}")]
    Serialization(String),
}

/// Failure of the HTTP requester itself (before any status is known).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport failed: {0}")]
    Other(String),
}

/// Trust check failure. Both kinds are handled identically by callers;
/// they are kept apart for logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteTrustError {
    #[error("trust service unreachable: {0}")]
    Unreachable(String),

    #[error("trust response malformed: {0}")]
    Malformed(String),
}

/// Flag source unreachable or malformed. Resolution is deferred to a later run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteConfigError {
    #[error("flag source unreachable: {0}")]
    Unreachable(String),

    #[error("flag source malformed: {0}")]
    Malformed(String),
}

/// Update manifest unreachable or malformed. The check is abandoned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateCheckError {
    #[error("update manifest unreachable: {0}")]
    Unreachable(String),

    #[error("update manifest malformed: {0}")]
    Malformed(String),
}

/// Artifact transfer interrupted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("download transport failed: {0}")]
    Transport(String),

    #[error("download returned status {0}")]
    Status(u16),

    #[error("download read timed out")]
    Timeout,

    #[error("download io failed: {0}")]
    Io(String),

    #[error("download cancelled")]
    Cancelled,

    #[error("download target unavailable: {0}")]
    Prepare(#[from] FileSystemError),
}

/// Artifact write/delete failure outside of the transfer itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileSystemError {
    #[error("failed to delete {path}: {reason}")]
    Delete { path: String, reason: String },

    #[error("failed to prepare {path}: {reason}")]
    Write { path: String, reason: String },
}

/// The platform installer could not be started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("installer hand-off failed: {0}")]
pub struct InstallError(pub String);

impl From<TransportError> for RemoteTrustError {
    fn from(err: TransportError) -> Self {
        RemoteTrustError::Unreachable(err.to_string())
    }
}

impl From<TransportError> for RemoteConfigError {
    fn from(err: TransportError) -> Self {
        RemoteConfigError::Unreachable(err.to_string())
    }
}

impl From<TransportError> for UpdateCheckError {
    fn from(err: TransportError) -> Self {
        UpdateCheckError::Unreachable(err.to_string())
    }
}
