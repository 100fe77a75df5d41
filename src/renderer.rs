use crate::prettify;
use crate::types::ReportEntry;

/// Renders the complete listing page for the given (already sorted) entries.
///
/// Titles, filenames, and previews are interpolated as-is. The markup
/// stripping done during preview extraction is the only sanitisation
/// applied, so a `<` or `&` surviving in a title lands in the output
/// verbatim.
#[must_use]
pub fn render_index(entries: &[ReportEntry]) -> String {
    let mut html = String::new();

    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
    html.push_str("  <title>GenAI — Reports (generated)</title>\n");
    html.push_str("  <link href=\"https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;600&display=swap\" rel=\"stylesheet\">\n");
    html.push_str("  <style>body{font-family:'JetBrains Mono',monospace;padding:24px;max-width:920px;margin:0 auto}</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("  <h1>GenAI — Reports (generated)</h1>\n");
    html.push_str("  <ul>\n");

    for entry in entries {
        html.push_str(&format!(
            "    <li><a href=\"{}\">{} — {}</a><div>{}</div></li>\n",
            entry.name,
            prettify::prettify_filename(&entry.name),
            entry.name,
            entry.preview
        ));
    }

    html.push_str("  </ul>\n");
    html.push_str("</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn make_entry(name: &str, preview: &str) -> ReportEntry {
        ReportEntry {
            name: name.to_string(),
            modified: Local::now(),
            preview: preview.to_string(),
        }
    }

    #[test]
    fn test_render_preserves_entry_order() {
        let entries = vec![make_entry("a.html", "Alpha"), make_entry("b.html", "Beta")];
        let html = render_index(&entries);

        let pos_a = html.find("href=\"a.html\"").unwrap();
        let pos_b = html.find("href=\"b.html\"").unwrap();
        assert!(pos_a < pos_b);
    }

    #[test]
    fn test_render_entry_shape() {
        let entries = vec![make_entry("report-2024-03-15.html", "Quarterly numbers")];
        let html = render_index(&entries);

        assert!(html.contains(
            "<li><a href=\"report-2024-03-15.html\">2024 03 15 — report-2024-03-15.html</a>\
             <div>Quarterly numbers</div></li>"
        ));
    }

    #[test]
    fn test_render_empty_list() {
        let html = render_index(&[]);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<ul>"));
        assert!(!html.contains("<li>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_render_does_not_escape() {
        // Reproduces the original output-format gap on purpose.
        let entries = vec![make_entry("x.html", "a < b & c")];
        let html = render_index(&entries);
        assert!(html.contains("<div>a < b & c</div>"));
    }
}
