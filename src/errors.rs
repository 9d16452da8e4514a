// Error taxonomy for the urltitle pipeline
// Feed-source failures are not here; the poller absorbs them per feed

use std::io;

use thiserror::Error;

/// Terminal failures for one urltitle invocation
#[derive(Debug, Error)]
pub enum UrlTitleError {
    /// Argument does not look like an http(s) URL
    #[error("invalid url")]
    InvalidUrl,

    /// Scratch file could not be allocated
    #[error("cant create temp file")]
    ScratchFile(#[source] io::Error),

    /// Download attempt failed (transport error or non-success status)
    #[error("download failed: {0}")]
    Fetch(String),

    /// External file-type detector or decompressor could not be run
    #[error("file inspection failed: {0}")]
    Inspect(String),
}
