use once_cell::sync::Lazy;
use regex::Regex;

/// The plain-text fallback is cut to this many characters.
const FALLBACK_PREVIEW_CHARS: usize = 200;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title>([^<]+)</title>").expect("hardcoded pattern"));
static H1_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("hardcoded pattern"));
static P_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("hardcoded pattern"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("hardcoded pattern"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("hardcoded pattern"));

/// Derives a short descriptive string from raw report content.
///
/// Rules are tried in priority order, first match wins, first occurrence
/// only: the `<title>` text, else the first `<h1>` with nested markup
/// stripped, else the first `<p>` likewise, else the whole document with
/// markup removed and whitespace collapsed, cut to 200 characters. Only the
/// last tier truncates.
#[must_use]
pub fn extract_preview(content: &str) -> String {
    if let Some(caps) = TITLE_RE.captures(content) {
        return caps[1].trim().to_string();
    }
    if let Some(caps) = H1_RE.captures(content) {
        return TAG_RE.replace_all(&caps[1], "").trim().to_string();
    }
    if let Some(caps) = P_RE.captures(content) {
        return TAG_RE.replace_all(&caps[1], "").trim().to_string();
    }

    let text = TAG_RE.replace_all(content, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().chars().take(FALLBACK_PREVIEW_CHARS).collect()
}
