//! Update coordinator.
//!
//! Drives [`UpdateStateMachine`] through one run and executes its side effects:
//! manifest fetch, the two consent prompts, the download, cleanup and the
//! installer hand-off. Persists nothing.

use std::sync::Arc;

use lg_core::{
    ports::{
        AppLifecyclePort, ArtifactDownloaderPort, InstallerPort, RemoteClientPort, RemoteRequest,
        UserPromptPort,
    },
    update::{
        artifact_file_name, DownloadedArtifact, UpdateAction, UpdateEvent, UpdateManifest,
        UpdateOutcome, UpdateState, UpdateStateMachine,
    },
    DownloadError, FileSystemError, UpdateCheckError,
};
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::context::AppContext;
use crate::single_flight::OperationKind;

const DOWNLOAD_PROMPT_TITLE: &str = "New version available";
const INSTALL_PROMPT_TITLE: &str = "Download complete";

/// Ports the coordinator needs, grouped.
#[derive(Clone)]
pub struct UpdatePorts {
    pub remote: Arc<dyn RemoteClientPort>,
    pub downloader: Arc<dyn ArtifactDownloaderPort>,
    pub prompt: Arc<dyn UserPromptPort>,
    pub installer: Arc<dyn InstallerPort>,
    pub lifecycle: Arc<dyn AppLifecyclePort>,
}

pub struct UpdateCoordinator {
    ctx: AppContext,
    ports: UpdatePorts,
}

impl UpdateCoordinator {
    pub fn new(ctx: AppContext, ports: UpdatePorts) -> Self {
        Self { ctx, ports }
    }

    /// Run one update check to a terminal state.
    ///
    /// Never panics on remote or filesystem failure: every failure is logged,
    /// shown through the blocking error notification, and returned as an
    /// [`UpdateOutcome`].
    pub async fn run(&self) -> UpdateOutcome {
        let Some(_guard) = self
            .ctx
            .single_flight
            .try_acquire(OperationKind::ManifestCheck)
        else {
            return UpdateOutcome::AlreadyInFlight;
        };

        let span = info_span!(
            "usecase.update_coordinator.run",
            running_version = %self.ctx.running_version
        );

        async {
            let mut current = UpdateState::Idle;
            let mut pending_events = vec![UpdateEvent::Start];

            while let Some(event) = pending_events.pop() {
                let from = format!("{current:?}");
                let event_name = format!("{event:?}");
                let (next, actions) = UpdateStateMachine::transition(current, event);
                debug!(from = %from, to = ?next, event = %event_name, "update state transition");
                current = next;
                pending_events.extend(self.execute_actions(actions).await);
            }

            let outcome = UpdateOutcome::from_state(&current);
            if outcome.is_failure() {
                warn!(?outcome, "update run failed");
            } else {
                info!(?outcome, "update run finished");
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<UpdateAction>) -> Vec<UpdateEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "update executing action");
            let event = match action {
                UpdateAction::FetchManifest => Some(match self.fetch_manifest().await {
                    Ok(manifest) => UpdateEvent::ManifestReceived {
                        manifest,
                        running_version: self.ctx.running_version.clone(),
                    },
                    Err(err) => UpdateEvent::ManifestFailed(err),
                }),
                UpdateAction::PromptDownload { version } => {
                    let message = format!(
                        "A new version of {} ({version}) is available. Would you like to download it now?",
                        self.ctx.product_name
                    );
                    let accepted = self
                        .ports
                        .prompt
                        .confirm(DOWNLOAD_PROMPT_TITLE, &message)
                        .await;
                    if !accepted {
                        info!("User chose not to download the update");
                    }
                    Some(UpdateEvent::DownloadConsent(accepted))
                }
                UpdateAction::Download { manifest } => Some(match self.download(&manifest).await {
                    Ok(artifact) => UpdateEvent::DownloadCompleted(artifact),
                    Err(err) => UpdateEvent::DownloadFailed(err),
                }),
                UpdateAction::PromptInstall { artifact } => {
                    let message = format!(
                        "The update for {} ({}) has been downloaded. Would you like to install it now?",
                        self.ctx.product_name, artifact.version
                    );
                    let accepted = self
                        .ports
                        .prompt
                        .confirm(INSTALL_PROMPT_TITLE, &message)
                        .await;
                    if !accepted {
                        info!("User chose not to install the update");
                    }
                    Some(UpdateEvent::InstallConsent(accepted))
                }
                UpdateAction::DeleteArtifact { artifact } => {
                    Some(match delete_artifact(&artifact).await {
                        Ok(()) => UpdateEvent::ArtifactDeleted,
                        Err(err) => UpdateEvent::ArtifactDeleteFailed(err),
                    })
                }
                UpdateAction::HandOff { artifact } => {
                    info!(version = %artifact.version, "Installing update...");
                    match self.ports.installer.hand_off(&artifact).await {
                        Ok(()) => {
                            self.ports.lifecycle.request_exit(0);
                            None
                        }
                        Err(err) => Some(UpdateEvent::HandOffFailed(err)),
                    }
                }
                UpdateAction::NotifyError { title, message } => {
                    error!(%message, "update failed");
                    self.ports.prompt.notify_error(&title, &message).await;
                    None
                }
            };
            follow_up_events.extend(event);
        }
        follow_up_events
    }

    async fn fetch_manifest(&self) -> Result<UpdateManifest, UpdateCheckError> {
        let response = self
            .ports
            .remote
            .get(RemoteRequest::get(&self.ctx.endpoints.update_manifest))
            .await?;

        if !response.is_ok() {
            return Err(UpdateCheckError::Unreachable(format!(
                "invalid response status code {}",
                response.status
            )));
        }

        let manifest = UpdateManifest::from_response_body(&response.body)?;
        if !manifest.differs_from(&self.ctx.running_version) {
            info!(version = %manifest.version, "You have the latest version");
        }
        Ok(manifest)
    }

    async fn download(&self, manifest: &UpdateManifest) -> Result<DownloadedArtifact, DownloadError> {
        tokio::fs::create_dir_all(&self.ctx.downloads_dir)
            .await
            .map_err(|e| FileSystemError::Write {
                path: self.ctx.downloads_dir.display().to_string(),
                reason: e.to_string(),
            })?;

        let target = self
            .ctx
            .downloads_dir
            .join(artifact_file_name(&self.ctx.product_name, &manifest.version));

        info!(version = %manifest.version, target = %target.display(), "Downloading update...");
        let bytes = self
            .ports
            .downloader
            .download(&manifest.download_url, &target, &self.ctx.shutdown)
            .await?;
        info!(bytes, "update downloaded");

        Ok(DownloadedArtifact {
            path: target,
            version: manifest.version.clone(),
        })
    }
}

async fn delete_artifact(artifact: &DownloadedArtifact) -> Result<(), FileSystemError> {
    match tokio::fs::remove_file(&artifact.path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FileSystemError::Delete {
            path: artifact.path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}
