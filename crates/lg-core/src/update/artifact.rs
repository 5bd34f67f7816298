use std::path::{Path, PathBuf};

/// A fully downloaded installer package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedArtifact {
    pub path: PathBuf,
    pub version: String,
}

#[cfg(target_os = "windows")]
const ARTIFACT_EXTENSION: &str = ".exe";
#[cfg(target_os = "macos")]
const ARTIFACT_EXTENSION: &str = ".dmg";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const ARTIFACT_EXTENSION: &str = ".AppImage";

const PARTIAL_SUFFIX: &str = "part";

/// `<product>-<version><ext>`, with anything outside `[A-Za-z0-9._-]` replaced.
///
/// The version comes from the remote manifest and must never be able to
/// escape the temp directory.
pub fn artifact_file_name(product: &str, version: &str) -> String {
    let product = sanitize(product);
    let version = sanitize(version);
    format!("{product}-{version}{ARTIFACT_EXTENSION}")
}

/// Sibling path the transfer streams into before the final rename.
pub fn partial_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(PARTIAL_SUFFIX);
    target.with_file_name(name)
}

fn sanitize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.replace("..", "_")
    }
}
