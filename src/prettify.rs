use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}[-_.]\d{2}[-_.]\d{2}").expect("hardcoded pattern"));
// Day-then-month-name ("15March") or month-name-then-day ("jan-05") tokens.
static MONTH_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d{1,2}[a-z]{3,}|[a-z]{3,}[-_.]?\d{1,2}").expect("hardcoded pattern")
});
static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_.]+").expect("hardcoded pattern"));

/// Derives a display title from a report filename.
///
/// After stripping the `.html` extension, the first date-like token found
/// (ISO-style date first, then day/month-name combinations) is returned with
/// its separators replaced by spaces. Without such a token, separator runs
/// become single spaces and each word is capitalized. Best-effort: names
/// matching neither pattern well still get a title, just a worse one.
#[must_use]
pub fn prettify_filename(name: &str) -> String {
    let base = strip_html_extension(name);

    if let Some(token) = ISO_DATE_RE
        .find(base)
        .or_else(|| MONTH_TOKEN_RE.find(base))
    {
        return token.as_str().replace(['-', '_', '.'], " ");
    }

    SEPARATOR_RE
        .replace_all(base, " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_html_extension(name: &str) -> &str {
    match name.len().checked_sub(5) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".html") => {
            &name[..cut]
        }
        _ => name,
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
