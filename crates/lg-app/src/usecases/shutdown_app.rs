//! Use case for process shutdown.

use lg_core::{window::WindowGeometry, StorageError};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::identity::IdentityStore;

/// Persist the final window geometry and abort in-flight downloads.
pub struct ShutdownApp {
    identity: IdentityStore,
    shutdown: CancellationToken,
}

impl ShutdownApp {
    pub fn new(identity: IdentityStore, shutdown: CancellationToken) -> Self {
        Self { identity, shutdown }
    }

    pub fn execute(&self, geometry: Option<WindowGeometry>) -> Result<(), StorageError> {
        self.shutdown.cancel();
        if let Some(geometry) = geometry {
            self.identity.save_geometry(&geometry)?;
        }
        info!("shutdown complete");
        Ok(())
    }
}
