// Bounded single-attempt downloader

use std::path::Path;
use std::time::Duration;

use crate::errors::UrlTitleError;

/// Network timeout for the single download attempt
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Check the URL argument before any network access happens
pub fn validate_url(url: &str) -> Result<(), UrlTitleError> {
    if url.starts_with("http") {
        Ok(())
    } else {
        Err(UrlTitleError::InvalidUrl)
    }
}

/// Download `url` into `dest`: exactly one attempt, short timeout, no retries
pub async fn download(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<(), UrlTitleError> {
    let response = client
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .map_err(|err| UrlTitleError::Fetch(err.to_string()))?;

    if !response.status().is_success() {
        return Err(UrlTitleError::Fetch(format!(
            "status {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| UrlTitleError::Fetch(err.to_string()))?;

    tokio::fs::write(dest, &bytes)
        .await
        .map_err(|err| UrlTitleError::Fetch(err.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/page").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("").is_err());
    }
}
