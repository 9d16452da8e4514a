// Poller configuration
// Feed list from a JSON file, credentials from the environment

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One subreddit to poll and its dedup log location
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub subreddit: String,
    pub log_path: PathBuf,
}

/// Full poller configuration, loaded once at startup and never mutated
#[derive(Debug, Clone, Deserialize)]
pub struct PollerConfig {
    pub feeds: Vec<FeedConfig>,
}

impl PollerConfig {
    /// Load the feed list from a JSON config file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path))?;
        Ok(config)
    }
}

/// Reddit script-app credentials
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub user_agent: String,
}

impl RedditCredentials {
    /// Read credentials from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: env::var("REDDIT_CLIENT_ID").context("REDDIT_CLIENT_ID must be set")?,
            client_secret: env::var("REDDIT_CLIENT_SECRET")
                .context("REDDIT_CLIENT_SECRET must be set")?,
            username: env::var("REDDIT_USERNAME").context("REDDIT_USERNAME must be set")?,
            password: env::var("REDDIT_PASSWORD").context("REDDIT_PASSWORD must be set")?,
            user_agent: env::var("REDDIT_USER_AGENT")
                .unwrap_or_else(|_| format!("eggdrop-helpers/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feeds.json");
        std::fs::write(
            &path,
            r#"{"feeds":[{"subreddit":"astrology","log_path":"/tmp/astrology.txt"}]}"#,
        )
        .unwrap();

        let config = PollerConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.feeds.len(), 1);
        assert_eq!(config.feeds[0].subreddit, "astrology");
        assert_eq!(config.feeds[0].log_path, PathBuf::from("/tmp/astrology.txt"));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(PollerConfig::from_file("/nonexistent/feeds.json").is_err());
    }
}
