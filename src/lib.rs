// Eggdrop helper utilities - Rust edition
// A subreddit feed poller and a URL title fetcher for the chat bot

pub mod api;
pub mod classify;
pub mod config;
pub mod dedup;
pub mod errors;
pub mod fetch;
pub mod output;
pub mod poller;
pub mod scratch;
pub mod title;
pub mod utils;
