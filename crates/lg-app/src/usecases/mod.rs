//! Launch-time use cases
//!
//! ```text
//! StartApp
//!   ├── IdentityStore::get_or_create_token
//!   ├── CheckToken        (trust classification, not cached)
//!   ├── ResolveFlag       (commitment, cached forever)
//!   └── UpdateCoordinator (manifest → consent → download → consent → install)
//! ShutdownApp
//! ```

mod check_token;
mod resolve_flag;
mod shutdown_app;
mod start_app;
pub mod update;

pub use check_token::CheckToken;
pub use resolve_flag::{FlagResolveError, ResolveFlag};
pub use shutdown_app::ShutdownApp;
pub use start_app::{StartApp, StartupReport};
pub use update::{UpdateCoordinator, UpdatePorts};
