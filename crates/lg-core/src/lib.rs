//! # lg-core
//!
//! Core domain models and business rules for Launchgate.
//!
//! This crate contains pure domain logic without any infrastructure dependencies:
//! identity, window geometry, trust classification, the flag commitment,
//! the update state machine and the ports implemented by outer layers.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod flag;
pub mod ids;
pub mod ports;
pub mod store_keys;
pub mod trust;
pub mod update;
pub mod window;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use errors::{
    DownloadError, FileSystemError, InstallError, RemoteConfigError, RemoteTrustError,
    StorageError, TransportError, UpdateCheckError,
};
pub use ids::IdentityToken;
pub use trust::{TrustClassification, TrustValue};
pub use update::{DownloadedArtifact, UpdateManifest, UpdateState};
pub use window::WindowGeometry;
