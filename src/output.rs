// Output formatting for the calling bot framework
// urltitle writes exactly one \x02-delimited line per invocation

use std::io::{self, Write};

/// Field marker recognized by the bot's line parser (IRC bold)
pub const MARKER: char = '\x02';

/// Poller announcement line for one new post
pub fn announce_post(title: &str, permalink: &str) -> String {
    format!("{m}{title}{m} https://reddit.com{permalink}", m = MARKER)
}

/// Labeled title line
pub fn title_line(title: &str) -> String {
    format!("{m}title{m} {title}", m = MARKER)
}

/// Labeled file-info line for non-HTML resources
pub fn file_info_line(description: &str, size: &str) -> String {
    format!("{m}file{m} {description} ({size})", m = MARKER)
}

/// Write the title line to stdout and flush; no trailing newline
pub fn print_title(title: &str) -> io::Result<()> {
    write_flushed(&title_line(title))
}

/// Write the file-info line to stdout and flush; no trailing newline
pub fn print_file_info(description: &str, size: &str) -> io::Result<()> {
    write_flushed(&file_info_line(description, size))
}

/// Write a plain error message to stdout and flush
pub fn print_error(message: &str) -> io::Result<()> {
    write_flushed(&format!("error: {message}"))
}

fn write_flushed(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(line.as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_post() {
        assert_eq!(
            announce_post("Mars in Retrograde", "/r/astrology/comments/abc/post/"),
            "\x02Mars in Retrograde\x02 https://reddit.com/r/astrology/comments/abc/post/"
        );
    }

    #[test]
    fn test_title_line() {
        assert_eq!(title_line("Example Page"), "\x02title\x02 Example Page");
    }

    #[test]
    fn test_file_info_line() {
        assert_eq!(
            file_info_line("PNG image data, 16 x 16", "4.0K"),
            "\x02file\x02 PNG image data, 16 x 16 (4.0K)"
        );
    }
}
