//! # lg-platform
//!
//! Platform adapters for Launchgate.
//!
//! This crate contains the implementations that interact with the operating
//! system: app directories, terminal prompts, the installer hand-off, the
//! process lifecycle and the headless window.

pub mod app_dirs;
pub mod installer;
pub mod lifecycle;
pub mod prompt;
pub mod window;

pub use app_dirs::DirsAppDirsAdapter;
pub use installer::SystemInstaller;
pub use lifecycle::ProcessLifecycle;
pub use prompt::TerminalPrompt;
pub use window::HeadlessWindow;
