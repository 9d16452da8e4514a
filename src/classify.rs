// Content classification via the external `file` detector
// Decides which downstream path handles a downloaded resource

use std::path::Path;

use tokio::process::Command;

use crate::errors::UrlTitleError;

/// Coarse classification of downloaded bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Xml,
    Gzip,
    Other,
}

/// Detector verdict for one file
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub kind: ContentKind,
    /// Human-readable type string as reported by the detector
    pub description: String,
}

/// Run `file -b` on the given path and classify its output.
// no timeout on the detector call; a hung `file` hangs the run
pub async fn inspect(path: &Path) -> Result<FileInfo, UrlTitleError> {
    detect("file", path).await
}

/// Like [`inspect`], but a detector failure degrades to a generic verdict
/// so the caller can still print a file-info line and exit cleanly
pub async fn inspect_or_fallback(path: &Path) -> FileInfo {
    detect_or_fallback("file", path).await
}

async fn detect(command: &str, path: &Path) -> Result<FileInfo, UrlTitleError> {
    let output = Command::new(command)
        .arg("-b")
        .arg(path)
        .output()
        .await
        .map_err(|err| UrlTitleError::Inspect(err.to_string()))?;

    if !output.status.success() {
        return Err(UrlTitleError::Inspect(format!(
            "{} exited with {}",
            command, output.status
        )));
    }

    let description = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let kind = kind_from_description(&description);
    Ok(FileInfo { kind, description })
}

async fn detect_or_fallback(command: &str, path: &Path) -> FileInfo {
    match detect(command, path).await {
        Ok(info) => info,
        // "data" is what the detector itself says about unclassifiable bytes
        Err(_) => FileInfo {
            kind: ContentKind::Other,
            description: "data".to_string(),
        },
    }
}

/// Map a detector description to a content kind.
/// Gzip is checked first: `file` quotes the original member name, which for
/// web resources is often "something.html".
fn kind_from_description(description: &str) -> ContentKind {
    let lower = description.to_lowercase();
    if lower.contains("gzip") {
        ContentKind::Gzip
    } else if lower.contains("html") {
        ContentKind::Html
    } else if lower.contains("xml") {
        ContentKind::Xml
    } else {
        ContentKind::Other
    }
}

/// Decompress a gzip scratch file into a second scratch file
pub async fn gunzip_to(src: &Path, dest: &Path) -> Result<(), UrlTitleError> {
    let output = Command::new("gzip")
        .arg("-dc")
        .arg(src)
        .output()
        .await
        .map_err(|err| UrlTitleError::Inspect(err.to_string()))?;

    if !output.status.success() {
        return Err(UrlTitleError::Inspect(format!(
            "gzip exited with {}",
            output.status
        )));
    }

    tokio::fs::write(dest, &output.stdout)
        .await
        .map_err(|err| UrlTitleError::Inspect(err.to_string()))?;

    Ok(())
}
