// Title extraction from HTML/XML bytes
// Encoding sniff first, then a tolerant parse with two-tier title resolution

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use scraper::{Html, Selector};

/// Bytes of document prefix scanned for a declared charset
const SNIFF_WINDOW: usize = 1024;

/// Best-effort encoding detection: BOM, declared charset, UTF-8 check,
/// then a latin-1 fallback for everything else
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if let Some(encoding) = declared_charset(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Look for `charset=...` in the document prefix (meta tag or XML declaration)
fn declared_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let window = &bytes[..bytes.len().min(SNIFF_WINDOW)];
    let prefix = String::from_utf8_lossy(window).to_ascii_lowercase();

    let at = prefix.find("charset=")?;
    let rest = &prefix[at + "charset=".len()..];
    let label: String = rest
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    Encoding::for_label(label.as_bytes())
}

/// Decode document bytes with the sniffed encoding (lossy on bad sequences)
pub fn decode(bytes: &[u8]) -> String {
    let (text, _, _) = sniff_encoding(bytes).decode(bytes);
    text.into_owned()
}

/// Pull a title out of an HTML/XML document.
///
/// Strict priority order: a non-empty `<meta name="title">` content attribute
/// always wins; the `<title>` element text is only the fallback. Returns
/// `None` when neither yields non-empty text; that is not an error.
pub fn extract_title(document: &str) -> Option<String> {
    let parsed = Html::parse_document(document);

    let meta = Selector::parse(r#"meta[name="title"]"#).ok()?;
    if let Some(content) = parsed
        .select(&meta)
        .next()
        .and_then(|m| m.value().attr("content"))
    {
        let trimmed = content.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    let title = Selector::parse("title").ok()?;
    let text: String = parsed.select(&title).next()?.text().collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
