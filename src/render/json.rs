//! JSON rendering for extraction reports.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ChangeRecord, CommentRecord, ExtractionReport, Summary};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    comments: &'a [CommentRecord],
    revisions: &'a [ChangeRecord],
}

/// Convert an extraction report to JSON.
pub fn to_json(report: &ExtractionReport, format: JsonFormat) -> Result<String> {
    let wrapper = JsonReport {
        summary: report.summary(),
        comments: &report.comments,
        revisions: &report.revisions,
    };
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&wrapper),
        JsonFormat::Compact => serde_json::to_string(&wrapper),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
