// Reddit API client
// OAuth2 password grant, then /r/{sub}/new listings

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::config::RedditCredentials;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const OAUTH_API_BASE: &str = "https://oauth.reddit.com";

/// A single post from a subreddit listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditPost {
    /// Site-relative permalink, used as the dedup identifier
    pub permalink: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    title: String,
}

/// Authenticated Reddit client; one access token per run, no refresh
pub struct RedditClient {
    client: reqwest::Client,
    token: String,
}

impl RedditClient {
    /// Log in with the script-app password grant
    pub async fn login(client: reqwest::Client, creds: &RedditCredentials) -> Result<Self> {
        let response = client
            .post(TOKEN_URL)
            .basic_auth(&creds.client_id, Some(&creds.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", creds.username.as_str()),
                ("password", creds.password.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "reddit token request failed: {}",
                response.status()
            ));
        }

        let token: TokenResponse = response.json().await?;
        Ok(Self {
            client,
            token: token.access_token,
        })
    }

    /// Fetch up to `limit` newest posts for a subreddit, newest first
    pub async fn new_posts(&self, subreddit: &str, limit: u32) -> Result<Vec<RedditPost>> {
        let response = self
            .client
            .get(format!("{}/r/{}/new", OAUTH_API_BASE, subreddit))
            .bearer_auth(&self.token)
            .query(&[("limit", limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("subreddit listing failed: {}", response.status()));
        }

        let listing: Listing = response.json().await?;
        Ok(listing_posts(listing))
    }
}

/// Flatten a listing into posts; permalinks trimmed, titles entity-decoded
fn listing_posts(listing: Listing) -> Vec<RedditPost> {
    listing
        .data
        .children
        .into_iter()
        .map(|child| RedditPost {
            permalink: child.data.permalink.trim().to_string(),
            title: html_escape::decode_html_entities(&child.data.title).to_string(),
        })
        .collect()
}
