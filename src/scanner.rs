use crate::preview;
use crate::types::{OUTPUT_FILENAME, ReportEntry};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Lists report files in `dir`: names ending in `.html` (any case), minus
/// `index.html` (any case) and the generator's own output file. Order comes
/// from the underlying directory listing and carries no meaning; callers
/// impose their own.
pub fn list_report_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if is_report_file(&name) {
            names.push(name);
        } else {
            log::debug!("skipping {name}");
        }
    }

    Ok(names)
}

fn is_report_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".html") && lower != "index.html" && name != OUTPUT_FILENAME
}

/// Reads every report file in `dir` and derives its preview, returning
/// entries sorted newest-modified-first. Any unreadable file aborts the
/// whole scan; there is no per-file recovery.
pub fn scan_reports(dir: &Path) -> io::Result<Vec<ReportEntry>> {
    let mut entries = Vec::new();

    for name in list_report_files(dir)? {
        let path = dir.join(&name);
        let metadata = fs::metadata(&path)?;
        let modified: DateTime<Local> = metadata.modified()?.into();
        let content = String::from_utf8_lossy(&fs::read(&path)?).into_owned();

        entries.push(ReportEntry {
            name,
            modified,
            preview: preview::extract_preview(&content),
        });
    }

    // Newest first; name breaks mtime ties so repeated runs over an
    // unchanged directory produce byte-identical output.
    entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));

    Ok(entries)
}
