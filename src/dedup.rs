// Dedup log store and prefix-stop diff
// One permalink per line, newest first, capped at 100 entries

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::api::reddit::RedditPost;

/// Maximum entries kept in a dedup log after any write
pub const LOG_CAP: usize = 100;

/// Read a dedup log; a missing or unreadable file yields an empty log
pub fn load_log(path: &Path) -> Vec<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Overwrite a dedup log with at most [`LOG_CAP`] entries, one per line
// plain overwrite, no temp-file swap; a crash mid-write can truncate the log
pub fn save_log(path: &Path, entries: &[String]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    for entry in entries.iter().take(LOG_CAP) {
        writeln!(file, "{}", entry)?;
    }
    Ok(())
}

/// Collect posts not yet in the log, walking newest first.
///
/// Scanning stops at the first already-seen permalink; older unseen posts
/// sitting behind a seen one are never reported.
pub fn unseen_posts(seen: &[String], fetched: &[RedditPost]) -> Vec<RedditPost> {
    let mut new: Vec<RedditPost> = Vec::new();
    for post in fetched {
        if post.permalink.is_empty() {
            continue;
        }
        if seen.iter().any(|entry| entry == &post.permalink) {
            break;
        }
        if new.iter().any(|p| p.permalink == post.permalink) {
            continue;
        }
        new.push(post.clone());
    }
    new
}
