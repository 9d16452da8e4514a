// URL title fetcher
// Downloads a URL, classifies the content, and prints either a page title
// or a one-line file description for the calling bot

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eggdrop_helpers::classify::{self, ContentKind, FileInfo};
use eggdrop_helpers::errors::UrlTitleError;
use eggdrop_helpers::scratch::scratch_file;
use eggdrop_helpers::utils::formatters::human_size;
use eggdrop_helpers::{fetch, output, title};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "eggdrop_helpers=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // the bot passes the URL as the last argument
    let url = env::args().skip(1).last().unwrap_or_default();

    match run(&url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = output::print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(url: &str) -> Result<(), UrlTitleError> {
    fetch::validate_url(url)?;

    let client = reqwest::Client::builder()
        .user_agent(concat!("eggdrop-helpers/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|err| UrlTitleError::Fetch(err.to_string()))?;

    // scratch files remove themselves on drop, on every exit path below
    let scratch = scratch_file().map_err(UrlTitleError::ScratchFile)?;
    fetch::download(&client, url, scratch.path()).await?;

    // a broken detector is not the URL's fault: fall back to a generic
    // description instead of failing the whole invocation
    let info = classify::inspect_or_fallback(scratch.path()).await;
    match info.kind {
        ContentKind::Html | ContentKind::Xml => print_title_from(scratch.path()).await,
        ContentKind::Gzip => {
            let decompressed = scratch_file().map_err(UrlTitleError::ScratchFile)?;
            match inner_kind(scratch.path(), decompressed.path()).await {
                ContentKind::Html | ContentKind::Xml => {
                    print_title_from(decompressed.path()).await
                }
                // not a page after all: describe the original compressed file
                _ => print_file_info(scratch.path(), &info).await,
            }
        }
        ContentKind::Other => print_file_info(scratch.path(), &info).await,
    }
}

/// Decompress and re-classify; anything that fails along the way
/// degrades to the "describe the file" path instead of erroring out
async fn inner_kind(src: &Path, dest: &Path) -> ContentKind {
    if classify::gunzip_to(src, dest).await.is_err() {
        return ContentKind::Other;
    }
    match classify::inspect(dest).await {
        Ok(inner) => inner.kind,
        Err(_) => ContentKind::Other,
    }
}

async fn print_title_from(path: &Path) -> Result<(), UrlTitleError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| UrlTitleError::Inspect(err.to_string()))?;

    let document = title::decode(&bytes);
    if let Some(found) = title::extract_title(&document) {
        output::print_title(&found).map_err(|err| UrlTitleError::Inspect(err.to_string()))?;
    }
    // an absent title is a quiet success, not an error
    Ok(())
}

async fn print_file_info(path: &Path, info: &FileInfo) -> Result<(), UrlTitleError> {
    let len = tokio::fs::metadata(path)
        .await
        .map_err(|err| UrlTitleError::Inspect(err.to_string()))?
        .len();

    output::print_file_info(&info.description, &human_size(len))
        .map_err(|err| UrlTitleError::Inspect(err.to_string()))?;
    Ok(())
}
