//! Update coordinator integration tests.
//! 更新协调器集成测试

mod common;

use common::{manifest_body, FakeDownloader, FakeInstaller, Harness, ScriptedPrompt, RUNNING_VERSION};
use lg_app::OperationKind;
use lg_core::store_keys;
use lg_core::update::{artifact_file_name, UpdateOutcome, UPDATE_ERROR_TITLE};
use lg_core::{DownloadError, FileSystemError, TransportError, UpdateCheckError};

const MANIFEST_PATH: &str = "/app/get/update";

#[tokio::test]
async fn same_version_is_a_no_op() {
    let h = Harness::new(FakeDownloader::succeeding(b"bin"), ScriptedPrompt::answering(&[true]));
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body(RUNNING_VERSION));

    let outcome = h.usecases.update_coordinator().run().await;

    assert_eq!(outcome, UpdateOutcome::UpToDate);
    assert!(h.prompt.confirms().is_empty());
    assert!(h.prompt.errors().is_empty());
    assert_eq!(h.downloader.call_count(), 0);
}

#[tokio::test]
async fn declining_download_transfers_nothing() {
    let h = Harness::new(FakeDownloader::succeeding(b"bin"), ScriptedPrompt::answering(&[false]));
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body("2.0.0"));

    let outcome = h.usecases.update_coordinator().run().await;

    assert_eq!(outcome, UpdateOutcome::DeclinedDownload);
    assert_eq!(h.prompt.confirms().len(), 1);
    assert!(h.prompt.confirms()[0].1.contains("2.0.0"));
    assert_eq!(h.downloader.call_count(), 0);
    assert!(h.download_dir_entries().is_empty());
}

#[tokio::test]
async fn declining_install_deletes_artifact_and_leaves_store_untouched() {
    let h = Harness::new(
        FakeDownloader::succeeding(b"installer bytes"),
        ScriptedPrompt::answering(&[true, false]),
    );
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body("2.0.0"));
    let before = h.store.snapshot();

    let outcome = h.usecases.update_coordinator().run().await;

    assert_eq!(outcome, UpdateOutcome::DeclinedInstall);
    assert_eq!(h.prompt.confirms().len(), 2);
    assert_eq!(h.downloader.call_count(), 1);
    assert!(h.download_dir_entries().is_empty());
    assert!(h.installer.handed_off().is_empty());
    assert_eq!(h.store.snapshot(), before);
}

#[tokio::test]
async fn accepting_both_prompts_hands_off_and_requests_exit() {
    let h = Harness::new(
        FakeDownloader::succeeding(b"installer bytes"),
        ScriptedPrompt::answering(&[true, true]),
    );
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body("2.0.0"));

    let outcome = h.usecases.update_coordinator().run().await;

    assert_eq!(
        outcome,
        UpdateOutcome::Installing {
            version: "2.0.0".to_string()
        }
    );
    let handed_off = h.installer.handed_off();
    assert_eq!(handed_off.len(), 1);
    assert_eq!(
        handed_off[0].path,
        h.downloads.path().join(artifact_file_name(common::PRODUCT, "2.0.0"))
    );
    assert_eq!(std::fs::read(&handed_off[0].path).unwrap(), b"installer bytes");
    assert_eq!(h.lifecycle.exits(), vec![0]);
}

#[tokio::test]
async fn failed_hand_off_notifies_and_keeps_running() {
    let h = Harness::with_installer(
        FakeDownloader::succeeding(b"bin"),
        ScriptedPrompt::answering(&[true, true]),
        FakeInstaller {
            fail: true,
            ..Default::default()
        },
    );
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body("2.0.0"));

    let outcome = h.usecases.update_coordinator().run().await;

    assert!(matches!(outcome, UpdateOutcome::InstallFailed(_)));
    assert_eq!(h.prompt.errors().len(), 1);
    assert!(h.lifecycle.exits().is_empty());
}

#[tokio::test]
async fn manifest_failure_notifies_with_error_title() {
    let h = Harness::new(FakeDownloader::succeeding(b"bin"), ScriptedPrompt::answering(&[]));
    h.remote.respond(MANIFEST_PATH, 503, "");

    let outcome = h.usecases.update_coordinator().run().await;

    assert!(matches!(
        outcome,
        UpdateOutcome::CheckFailed(UpdateCheckError::Unreachable(_))
    ));
    let errors = h.prompt.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, UPDATE_ERROR_TITLE);
    assert!(h.prompt.confirms().is_empty());
}

#[tokio::test]
async fn manifest_transport_failure_is_unreachable() {
    let h = Harness::new(FakeDownloader::succeeding(b"bin"), ScriptedPrompt::answering(&[]));
    h.remote.fail(MANIFEST_PATH, TransportError::Timeout);

    let outcome = h.usecases.update_coordinator().run().await;

    assert!(matches!(
        outcome,
        UpdateOutcome::CheckFailed(UpdateCheckError::Unreachable(_))
    ));
}

#[tokio::test]
async fn malformed_manifest_is_reported_as_malformed() {
    let h = Harness::new(FakeDownloader::succeeding(b"bin"), ScriptedPrompt::answering(&[]));
    h.remote.respond(MANIFEST_PATH, 200, r#"{"version":"2.0.0"}"#);

    let outcome = h.usecases.update_coordinator().run().await;

    assert!(matches!(
        outcome,
        UpdateOutcome::CheckFailed(UpdateCheckError::Malformed(_))
    ));
    assert_eq!(h.prompt.errors().len(), 1);
}

#[tokio::test]
async fn download_failure_notifies_and_writes_nothing() {
    let h = Harness::new(
        FakeDownloader::failing(DownloadError::Status(404)),
        ScriptedPrompt::answering(&[true]),
    );
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body("2.0.0"));

    let outcome = h.usecases.update_coordinator().run().await;

    assert_eq!(
        outcome,
        UpdateOutcome::DownloadFailed(DownloadError::Status(404))
    );
    assert_eq!(h.prompt.errors().len(), 1);
    assert_eq!(h.prompt.confirms().len(), 1);
    assert!(h.download_dir_entries().is_empty());
    assert!(h.store.get_raw(store_keys::USER_TOKEN).is_none());
}

#[tokio::test]
async fn cancelled_download_is_not_reported_to_the_user() {
    let h = Harness::new(
        FakeDownloader::failing(DownloadError::Cancelled),
        ScriptedPrompt::answering(&[true]),
    );
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body("2.0.0"));

    let outcome = h.usecases.update_coordinator().run().await;

    assert_eq!(outcome, UpdateOutcome::DownloadFailed(DownloadError::Cancelled));
    assert!(h.prompt.errors().is_empty());
    assert!(h.download_dir_entries().is_empty());
}

#[tokio::test]
async fn unwritable_download_dir_is_a_filesystem_error() {
    let h = Harness::new(FakeDownloader::succeeding(b"bin"), ScriptedPrompt::answering(&[true]));
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body("2.0.0"));
    // a regular file where the downloads directory should be
    std::fs::remove_dir(h.downloads.path()).unwrap();
    std::fs::write(h.downloads.path(), b"occupied").unwrap();

    let outcome = h.usecases.update_coordinator().run().await;

    assert!(matches!(
        outcome,
        UpdateOutcome::DownloadFailed(DownloadError::Prepare(FileSystemError::Write { .. }))
    ));
    assert_eq!(h.downloader.call_count(), 0);
    assert_eq!(h.prompt.errors().len(), 1);

    std::fs::remove_file(h.downloads.path()).unwrap();
}

#[tokio::test]
async fn concurrent_check_is_rejected() {
    let h = Harness::new(FakeDownloader::succeeding(b"bin"), ScriptedPrompt::answering(&[]));
    h.remote.respond(MANIFEST_PATH, 200, &manifest_body(RUNNING_VERSION));

    let _held = h
        .usecases
        .context()
        .single_flight
        .try_acquire(OperationKind::ManifestCheck)
        .expect("first acquire");

    let outcome = h.usecases.update_coordinator().run().await;

    assert_eq!(outcome, UpdateOutcome::AlreadyInFlight);
    assert_eq!(h.remote.calls_to(MANIFEST_PATH), 0);
}
