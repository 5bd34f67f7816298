//! Self-update domain: manifest, artifact naming and the update state machine.

mod artifact;
mod manifest;
mod state_machine;

pub use artifact::{artifact_file_name, partial_path, DownloadedArtifact};
pub use manifest::UpdateManifest;
pub use state_machine::{
    DeclineStage, UpdateAction, UpdateEvent, UpdateOutcome, UpdateState, UpdateStateMachine,
    UPDATE_ERROR_TITLE,
};
