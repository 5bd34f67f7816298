use async_trait::async_trait;

use crate::errors::InstallError;
use crate::update::DownloadedArtifact;

/// Hands a downloaded package to the platform's own install mechanism.
#[async_trait]
pub trait InstallerPort: Send + Sync {
    async fn hand_off(&self, artifact: &DownloadedArtifact) -> Result<(), InstallError>;
}
