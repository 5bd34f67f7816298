//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `lg-app` and the
//! adapters in `lg-infra` / `lg-platform`. This follows Hexagonal Architecture
//! principles, allowing the core to remain independent of HTTP clients,
//! storage formats and desktop shells.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs here when it represents a capability used by more than one
//! use case and is implemented by an outer layer.

pub mod app_dirs;
pub mod app_lifecycle;
pub mod artifact_downloader;
pub mod errors;
pub mod installer;
pub mod key_value_store;
pub mod remote_client;
pub mod user_prompt;
pub mod window;

pub use app_dirs::AppDirsPort;
pub use app_lifecycle::AppLifecyclePort;
pub use artifact_downloader::ArtifactDownloaderPort;
pub use errors::AppDirsError;
pub use installer::InstallerPort;
pub use key_value_store::KeyValueStorePort;
pub use remote_client::{RemoteClientPort, RemoteRequest, RemoteResponse};
pub use user_prompt::UserPromptPort;
pub use window::WindowPort;
