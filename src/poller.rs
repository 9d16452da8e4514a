// Per-feed poll: fetch newest posts, diff against the dedup log,
// announce the unseen ones, persist the updated log

use std::io::{self, Write};

use tracing::warn;

use crate::api::reddit::{RedditClient, RedditPost};
use crate::config::FeedConfig;
use crate::{dedup, output};

/// What happened to one configured feed during a run.
/// A skipped feed never aborts the remaining feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    /// New posts were announced and the log was rewritten
    Reported(usize),
    /// Nothing new; the log file was left byte-for-byte untouched
    Quiet,
    /// Feed-source or announcement failure; no output persisted, no log mutation
    Skipped(String),
}

/// Process one configured feed end to end
pub async fn process_feed(reddit: &RedditClient, feed: &FeedConfig) -> FeedOutcome {
    let fetched = match reddit.new_posts(&feed.subreddit, dedup::LOG_CAP as u32).await {
        Ok(posts) => posts,
        Err(err) => return FeedOutcome::Skipped(err.to_string()),
    };

    record_new_posts(feed, &fetched, &mut io::stdout())
}

/// Diff a fetched batch against the feed's dedup log, announce the unseen
/// posts on `out`, and persist the updated log.
///
/// A quiet run returns before any write, leaving the log file bytes
/// untouched. A failed announcement write also leaves the log alone, so the
/// batch is announced again on the next run instead of being dropped.
pub fn record_new_posts<W: Write>(
    feed: &FeedConfig,
    fetched: &[RedditPost],
    out: &mut W,
) -> FeedOutcome {
    let seen = dedup::load_log(&feed.log_path);

    let new = dedup::unseen_posts(&seen, fetched);
    if new.is_empty() {
        return FeedOutcome::Quiet;
    }

    if let Err(err) = announce(&new, out) {
        return FeedOutcome::Skipped(format!("announcement write failed: {}", err));
    }

    if let Err(err) = dedup::save_log(&feed.log_path, &merged_log(&new, seen)) {
        warn!("r/{}: log write failed: {}", feed.subreddit, err);
    }

    FeedOutcome::Reported(new.len())
}

/// Write one announcement line per post, then flush
fn announce<W: Write>(posts: &[RedditPost], out: &mut W) -> io::Result<()> {
    for post in posts {
        writeln!(out, "{}", output::announce_post(&post.title, &post.permalink))?;
    }
    out.flush()
}

/// Prepend the freshly reported permalinks, newest at the front
fn merged_log(new: &[RedditPost], seen: Vec<String>) -> Vec<String> {
    let mut updated: Vec<String> = new.iter().map(|p| p.permalink.clone()).collect();
    updated.extend(seen);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn post(permalink: &str) -> RedditPost {
        RedditPost {
            permalink: permalink.to_string(),
            title: format!("title for {}", permalink),
        }
    }

    fn feed_at(log_path: std::path::PathBuf) -> FeedConfig {
        FeedConfig {
            subreddit: "astrology".to_string(),
            log_path,
        }
    }

    /// Writer whose first write fails, like announcing into a closed pipe
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_quiet_run_leaves_log_bytes_untouched() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("log.txt");
        fs::write(&log_path, "/a\n/b\n").unwrap();

        // newest fetched post is already seen: nothing to report
        let fetched = vec![post("/a"), post("/b")];
        let mut out = Vec::new();
        let outcome = record_new_posts(&feed_at(log_path.clone()), &fetched, &mut out);

        assert_eq!(outcome, FeedOutcome::Quiet);
        assert!(out.is_empty());
        assert_eq!(fs::read(&log_path).unwrap(), b"/a\n/b\n");
    }

    #[test]
    fn test_new_posts_announced_and_persisted() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("log.txt");
        fs::write(&log_path, "/a\n").unwrap();

        let fetched = vec![post("/x"), post("/y"), post("/a")];
        let mut out = Vec::new();
        let outcome = record_new_posts(&feed_at(log_path.clone()), &fetched, &mut out);

        assert_eq!(outcome, FeedOutcome::Reported(2));
        let announced = String::from_utf8(out).unwrap();
        assert!(announced.contains("\x02title for /x\x02 https://reddit.com/x"));
        assert!(announced.contains("\x02title for /y\x02 https://reddit.com/y"));
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "/x\n/y\n/a\n");
    }

    #[test]
    fn test_failed_announcement_leaves_log_untouched() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("log.txt");
        fs::write(&log_path, "/a\n").unwrap();

        let fetched = vec![post("/x"), post("/a")];
        let outcome = record_new_posts(&feed_at(log_path.clone()), &fetched, &mut FailingWriter);

        assert!(matches!(outcome, FeedOutcome::Skipped(_)));
        assert_eq!(fs::read(&log_path).unwrap(), b"/a\n");
    }

    #[test]
    fn test_merged_log_newest_first() {
        let new = vec![post("/newest"), post("/second")];
        let seen = vec!["/old".to_string()];

        let merged = merged_log(&new, seen);
        assert_eq!(merged, vec!["/newest", "/second", "/old"]);
    }
}
