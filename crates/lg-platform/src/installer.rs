//! Hands a downloaded package to the OS.
//!
//! - Windows: run the `.exe` installer.
//! - macOS: `open` the `.dmg`.
//! - Linux: mark the `.AppImage` executable and launch it.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use lg_core::{ports::InstallerPort, DownloadedArtifact, InstallError};
use tokio::process::Command;
use tracing::info;

#[derive(Debug, Default, Clone)]
pub struct SystemInstaller;

impl SystemInstaller {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "windows")]
async fn installer_command(path: &Path) -> Result<Command, InstallError> {
    Ok(Command::new(path))
}

#[cfg(target_os = "macos")]
async fn installer_command(path: &Path) -> Result<Command, InstallError> {
    let mut command = Command::new("open");
    command.arg(path);
    Ok(command)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
async fn installer_command(path: &Path) -> Result<Command, InstallError> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = tokio::fs::metadata(path)
        .await
        .map_err(|e| InstallError(format!("stat {} failed: {e}", path.display())))?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    tokio::fs::set_permissions(path, permissions)
        .await
        .map_err(|e| InstallError(format!("chmod {} failed: {e}", path.display())))?;
    Ok(Command::new(path))
}

#[async_trait]
impl InstallerPort for SystemInstaller {
    async fn hand_off(&self, artifact: &DownloadedArtifact) -> Result<(), InstallError> {
        let is_file = tokio::fs::metadata(&artifact.path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(InstallError(format!(
                "artifact missing: {}",
                artifact.path.display()
            )));
        }

        let mut command = installer_command(&artifact.path).await?;
        let child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| InstallError(format!("spawn {} failed: {e}", artifact.path.display())))?;

        info!(pid = ?child.id(), version = %artifact.version, "installer started");
        Ok(())
    }
}
