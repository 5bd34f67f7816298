#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use lg_app::{AppContext, AppDeps, RemoteEndpoints, UseCases};
use lg_core::ports::{
    AppLifecyclePort, ArtifactDownloaderPort, InstallerPort, KeyValueStorePort, RemoteClientPort,
    RemoteRequest, RemoteResponse, UserPromptPort, WindowPort,
};
use lg_core::update::{partial_path, DownloadedArtifact};
use lg_core::window::WindowGeometry;
use lg_core::{DownloadError, InstallError, StorageError, TransportError};

pub const BASE_URL: &str = "https://api.test";
pub const RUNNING_VERSION: &str = "1.0.0";
pub const PRODUCT: &str = "Launchgate";

#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.data.lock().unwrap().clone()
    }

    pub fn get_raw(&self, key: &str) -> Option<Value> {
        self.data.lock().unwrap().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: Value) {
        self.data.lock().unwrap().insert(key.to_string(), value);
    }
}

impl KeyValueStorePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.data.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.data.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.data.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Remote client answering by URL; unknown URLs fail to connect.
#[derive(Default)]
pub struct FakeRemote {
    routes: Mutex<HashMap<String, Result<RemoteResponse, TransportError>>>,
    calls: Mutex<Vec<RemoteRequest>>,
}

impl FakeRemote {
    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.routes.lock().unwrap().insert(
            format!("{BASE_URL}{path}"),
            Ok(RemoteResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
        );
    }

    pub fn fail(&self, path: &str, error: TransportError) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{BASE_URL}{path}"), Err(error));
    }

    pub fn calls(&self) -> Vec<RemoteRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        let url = format!("{BASE_URL}{path}");
        self.calls().iter().filter(|r| r.url == url).count()
    }
}

#[async_trait]
impl RemoteClientPort for FakeRemote {
    async fn get(&self, request: RemoteRequest) -> Result<RemoteResponse, TransportError> {
        self.calls.lock().unwrap().push(request.clone());
        self.routes
            .lock()
            .unwrap()
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Connect("no route".to_string())))
    }
}

/// Downloader that writes `payload` through a `.part` file, or fails.
pub struct FakeDownloader {
    payload: Vec<u8>,
    failure: Option<DownloadError>,
    calls: Mutex<Vec<String>>,
}

impl FakeDownloader {
    pub fn succeeding(payload: &[u8]) -> Self {
        Self {
            payload: payload.to_vec(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DownloadError) -> Self {
        Self {
            payload: Vec::new(),
            failure: Some(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ArtifactDownloaderPort for FakeDownloader {
    async fn download(
        &self,
        url: &str,
        target: &Path,
        _cancel: &CancellationToken,
    ) -> Result<u64, DownloadError> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let part = partial_path(target);
        std::fs::write(&part, &self.payload).map_err(|e| DownloadError::Io(e.to_string()))?;
        std::fs::rename(&part, target).map_err(|e| DownloadError::Io(e.to_string()))?;
        Ok(self.payload.len() as u64)
    }
}

/// Prompt answering from a script; records everything shown.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    confirms: Mutex<Vec<(String, String)>>,
    errors: Mutex<Vec<(String, String)>>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            ..Default::default()
        }
    }

    pub fn confirms(&self) -> Vec<(String, String)> {
        self.confirms.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserPromptPort for ScriptedPrompt {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        self.confirms
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }

    async fn notify_error(&self, title: &str, message: &str) {
        self.errors
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

#[derive(Default)]
pub struct FakeInstaller {
    pub fail: bool,
    pub handed_off: Mutex<Vec<DownloadedArtifact>>,
}

impl FakeInstaller {
    pub fn handed_off(&self) -> Vec<DownloadedArtifact> {
        self.handed_off.lock().unwrap().clone()
    }
}

#[async_trait]
impl InstallerPort for FakeInstaller {
    async fn hand_off(&self, artifact: &DownloadedArtifact) -> Result<(), InstallError> {
        if self.fail {
            return Err(InstallError("no installer".to_string()));
        }
        self.handed_off.lock().unwrap().push(artifact.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingLifecycle {
    exits: Mutex<Vec<i32>>,
}

impl RecordingLifecycle {
    pub fn exits(&self) -> Vec<i32> {
        self.exits.lock().unwrap().clone()
    }
}

impl AppLifecyclePort for RecordingLifecycle {
    fn request_exit(&self, code: i32) {
        self.exits.lock().unwrap().push(code);
    }
}

#[derive(Default)]
pub struct RecordingWindow {
    applied: Mutex<Vec<WindowGeometry>>,
}

impl RecordingWindow {
    pub fn applied(&self) -> Vec<WindowGeometry> {
        self.applied.lock().unwrap().clone()
    }
}

impl WindowPort for RecordingWindow {
    fn apply_geometry(&self, geometry: &WindowGeometry) {
        self.applied.lock().unwrap().push(*geometry);
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub remote: Arc<FakeRemote>,
    pub downloader: Arc<FakeDownloader>,
    pub prompt: Arc<ScriptedPrompt>,
    pub installer: Arc<FakeInstaller>,
    pub lifecycle: Arc<RecordingLifecycle>,
    pub window: Arc<RecordingWindow>,
    pub downloads: TempDir,
    pub usecases: UseCases,
}

impl Harness {
    pub fn new(downloader: FakeDownloader, prompt: ScriptedPrompt) -> Self {
        Self::with_installer(downloader, prompt, FakeInstaller::default())
    }

    pub fn with_installer(
        downloader: FakeDownloader,
        prompt: ScriptedPrompt,
        installer: FakeInstaller,
    ) -> Self {
        let store = Arc::new(MemoryStore::default());
        let remote = Arc::new(FakeRemote::default());
        let downloader = Arc::new(downloader);
        let prompt = Arc::new(prompt);
        let installer = Arc::new(installer);
        let lifecycle = Arc::new(RecordingLifecycle::default());
        let window = Arc::new(RecordingWindow::default());
        let downloads = TempDir::new().expect("create downloads dir");

        let ctx = AppContext::new(
            RUNNING_VERSION,
            PRODUCT,
            RemoteEndpoints::from_base_url(BASE_URL),
            downloads.path().to_path_buf(),
        );
        let deps = AppDeps {
            store: store.clone(),
            remote: remote.clone(),
            downloader: downloader.clone(),
            prompt: prompt.clone(),
            window: window.clone(),
            installer: installer.clone(),
            lifecycle: lifecycle.clone(),
        };

        Self {
            store,
            remote,
            downloader,
            prompt,
            installer,
            lifecycle,
            window,
            downloads,
            usecases: UseCases::new(ctx, deps),
        }
    }

    pub fn download_dir_entries(&self) -> Vec<String> {
        std::fs::read_dir(self.downloads.path())
            .expect("read downloads dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect()
    }
}

pub fn manifest_body(version: &str) -> String {
    format!(r#"{{"version":"{version}","downloadUrl":"https://cdn.test/app-{version}"}}"#)
}
