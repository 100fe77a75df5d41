use chrono::{DateTime, Local};

/// Name of the generated listing page, written into the scanned directory
/// and regenerated in full on every run.
pub const OUTPUT_FILENAME: &str = "index.generated.html";

/// One discovered report file, held in memory for the duration of a run.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub name: String,
    pub modified: DateTime<Local>,
    pub preview: String,
}
