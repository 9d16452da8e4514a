// Subreddit feed poller
// Announces unseen posts for each configured feed and updates the dedup logs

use std::env;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eggdrop_helpers::api::reddit::RedditClient;
use eggdrop_helpers::config::{PollerConfig, RedditCredentials};
use eggdrop_helpers::poller::{process_feed, FeedOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; announcements go to stdout, diagnostics to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "eggdrop_helpers=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config_path =
        env::var("REDDIT_POLLER_CONFIG").unwrap_or_else(|_| "feeds.json".to_string());
    let config = PollerConfig::from_file(&config_path)?;
    let creds = RedditCredentials::from_env()?;

    let client = reqwest::Client::builder()
        .user_agent(creds.user_agent.clone())
        .build()
        .context("failed to create HTTP client")?;

    let reddit = RedditClient::login(client, &creds).await?;

    // One feed's failure never aborts the remaining feeds
    for feed in &config.feeds {
        match process_feed(&reddit, feed).await {
            FeedOutcome::Reported(count) => info!("r/{}: {} new posts", feed.subreddit, count),
            FeedOutcome::Quiet => info!("r/{}: nothing new", feed.subreddit),
            FeedOutcome::Skipped(reason) => warn!("r/{}: skipped ({})", feed.subreddit, reason),
        }
    }

    Ok(())
}
