//! Update state machine.
//!
//! Pure transition function for one update run; side effects are returned as
//! [`UpdateAction`]s and executed by the coordinator in `lg-app`.
//!
//! ```text
//! Idle ─► CheckingManifest ─┬─► UpToDate
//!                           ├─► CheckFailed
//!                           └─► AwaitingDownloadConsent ─┬─► Declined(Download)
//!                                                        └─► Downloading ─┬─► DownloadFailed
//!                                                                         └─► AwaitingInstallConsent ─┬─► Declined(Install) + delete
//!                                                                                                     └─► Installing
//! ```

use crate::errors::{DownloadError, FileSystemError, InstallError, UpdateCheckError};
use crate::update::{DownloadedArtifact, UpdateManifest};

/// Title of the blocking error notification for every update failure.
pub const UPDATE_ERROR_TITLE: &str = "Update check error";

/// Which consent prompt the user declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineStage {
    Download,
    Install,
}

/// Update run state.
///
/// 更新流程状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateState {
    Idle,
    CheckingManifest,
    /// Terminal: remote version equals the running version.
    UpToDate,
    /// Terminal: manifest unreachable or malformed.
    CheckFailed { error: UpdateCheckError },
    AwaitingDownloadConsent { manifest: UpdateManifest },
    Downloading { manifest: UpdateManifest },
    /// Terminal: transfer interrupted.
    DownloadFailed { error: DownloadError },
    AwaitingInstallConsent { artifact: DownloadedArtifact },
    /// Terminal: user said "no".
    Declined { stage: DeclineStage },
    /// Terminal: user declined install but the artifact could not be removed.
    CleanupFailed { error: FileSystemError },
    /// Terminal: handed off to the platform installer; the process exits.
    Installing { artifact: DownloadedArtifact },
    /// Terminal: the platform installer could not be started.
    InstallFailed { error: InstallError },
}

impl UpdateState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UpdateState::UpToDate
                | UpdateState::CheckFailed { .. }
                | UpdateState::DownloadFailed { .. }
                | UpdateState::Declined { .. }
                | UpdateState::CleanupFailed { .. }
                | UpdateState::Installing { .. }
                | UpdateState::InstallFailed { .. }
        )
    }
}

/// Events that drive an update run.
///
/// 驱动更新流程的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    Start,
    ManifestReceived {
        manifest: UpdateManifest,
        running_version: String,
    },
    ManifestFailed(UpdateCheckError),
    DownloadConsent(bool),
    DownloadCompleted(DownloadedArtifact),
    DownloadFailed(DownloadError),
    InstallConsent(bool),
    ArtifactDeleted,
    ArtifactDeleteFailed(FileSystemError),
    HandOffFailed(InstallError),
}

/// Side-effects produced by transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    FetchManifest,
    PromptDownload { version: String },
    Download { manifest: UpdateManifest },
    PromptInstall { artifact: DownloadedArtifact },
    DeleteArtifact { artifact: DownloadedArtifact },
    HandOff { artifact: DownloadedArtifact },
    NotifyError { title: String, message: String },
}

/// Summary of a finished run, derived from its terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate,
    DeclinedDownload,
    DeclinedInstall,
    Installing { version: String },
    CheckFailed(UpdateCheckError),
    DownloadFailed(DownloadError),
    CleanupFailed(FileSystemError),
    InstallFailed(InstallError),
    /// Another update run was already in flight; this trigger was rejected.
    AlreadyInFlight,
    /// The state machine stopped in a non-terminal state.
    Stalled(String),
}

impl UpdateOutcome {
    pub fn from_state(state: &UpdateState) -> Self {
        match state {
            UpdateState::UpToDate => UpdateOutcome::UpToDate,
            UpdateState::Declined {
                stage: DeclineStage::Download,
            } => UpdateOutcome::DeclinedDownload,
            UpdateState::Declined {
                stage: DeclineStage::Install,
            } => UpdateOutcome::DeclinedInstall,
            UpdateState::Installing { artifact } => UpdateOutcome::Installing {
                version: artifact.version.clone(),
            },
            UpdateState::CheckFailed { error } => UpdateOutcome::CheckFailed(error.clone()),
            UpdateState::DownloadFailed { error } => UpdateOutcome::DownloadFailed(error.clone()),
            UpdateState::CleanupFailed { error } => UpdateOutcome::CleanupFailed(error.clone()),
            UpdateState::InstallFailed { error } => UpdateOutcome::InstallFailed(error.clone()),
            other => UpdateOutcome::Stalled(format!("{other:?}")),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            UpdateOutcome::CheckFailed(_)
                | UpdateOutcome::DownloadFailed(_)
                | UpdateOutcome::CleanupFailed(_)
                | UpdateOutcome::InstallFailed(_)
                | UpdateOutcome::Stalled(_)
        )
    }
}

fn notify(message: impl ToString) -> UpdateAction {
    UpdateAction::NotifyError {
        title: UPDATE_ERROR_TITLE.to_string(),
        message: message.to_string(),
    }
}

/// Pure update state machine.
///
/// 纯状态机：不包含副作用。
pub struct UpdateStateMachine;

impl UpdateStateMachine {
    pub fn transition(state: UpdateState, event: UpdateEvent) -> (UpdateState, Vec<UpdateAction>) {
        match (state, event) {
            (UpdateState::Idle, UpdateEvent::Start) => {
                (UpdateState::CheckingManifest, vec![UpdateAction::FetchManifest])
            }
            (
                UpdateState::CheckingManifest,
                UpdateEvent::ManifestReceived {
                    manifest,
                    running_version,
                },
            ) => {
                if manifest.differs_from(&running_version) {
                    let version = manifest.version.clone();
                    (
                        UpdateState::AwaitingDownloadConsent { manifest },
                        vec![UpdateAction::PromptDownload { version }],
                    )
                } else {
                    (UpdateState::UpToDate, Vec::new())
                }
            }
            (UpdateState::CheckingManifest, UpdateEvent::ManifestFailed(error)) => {
                let action = notify(&error);
                (UpdateState::CheckFailed { error }, vec![action])
            }
            (UpdateState::AwaitingDownloadConsent { .. }, UpdateEvent::DownloadConsent(false)) => (
                UpdateState::Declined {
                    stage: DeclineStage::Download,
                },
                Vec::new(),
            ),
            (
                UpdateState::AwaitingDownloadConsent { manifest },
                UpdateEvent::DownloadConsent(true),
            ) => (
                UpdateState::Downloading {
                    manifest: manifest.clone(),
                },
                vec![UpdateAction::Download { manifest }],
            ),
            (UpdateState::Downloading { .. }, UpdateEvent::DownloadCompleted(artifact)) => (
                UpdateState::AwaitingInstallConsent {
                    artifact: artifact.clone(),
                },
                vec![UpdateAction::PromptInstall { artifact }],
            ),
            // Cancellation comes from shutdown; nobody is left to acknowledge a prompt.
            (UpdateState::Downloading { .. }, UpdateEvent::DownloadFailed(DownloadError::Cancelled)) => (
                UpdateState::DownloadFailed {
                    error: DownloadError::Cancelled,
                },
                vec![],
            ),
            (UpdateState::Downloading { .. }, UpdateEvent::DownloadFailed(error)) => {
                let action = notify(&error);
                (UpdateState::DownloadFailed { error }, vec![action])
            }
            (
                UpdateState::AwaitingInstallConsent { artifact },
                UpdateEvent::InstallConsent(false),
            ) => (
                UpdateState::Declined {
                    stage: DeclineStage::Install,
                },
                vec![UpdateAction::DeleteArtifact { artifact }],
            ),
            (
                UpdateState::AwaitingInstallConsent { artifact },
                UpdateEvent::InstallConsent(true),
            ) => (
                UpdateState::Installing {
                    artifact: artifact.clone(),
                },
                vec![UpdateAction::HandOff { artifact }],
            ),
            (
                UpdateState::Declined {
                    stage: DeclineStage::Install,
                },
                UpdateEvent::ArtifactDeleted,
            ) => (
                UpdateState::Declined {
                    stage: DeclineStage::Install,
                },
                Vec::new(),
            ),
            (
                UpdateState::Declined {
                    stage: DeclineStage::Install,
                },
                UpdateEvent::ArtifactDeleteFailed(error),
            ) => {
                let action = notify(&error);
                (UpdateState::CleanupFailed { error }, vec![action])
            }
            (UpdateState::Installing { .. }, UpdateEvent::HandOffFailed(error)) => {
                let action = notify(&error);
                (UpdateState::InstallFailed { error }, vec![action])
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}
