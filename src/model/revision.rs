//! Tracked-change record types.

use serde::{Deserialize, Serialize};

/// Category of a tracked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Deleted content (`w:del`).
    Delete,
    /// Inserted content (`w:ins`).
    Insert,
    /// Run formatting changed (`w:rPrChange`).
    FormatChange,
    /// Paragraph formatting changed (`w:pPrChange`).
    ParagraphFormatChange,
}

/// One tracked change, created once during collection and immutable
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Source-provided identifier; 0 when absent or non-numeric. Used
    /// only for stable ordering.
    pub id: u64,

    /// Change category.
    pub kind: ChangeKind,

    /// Author attribute, verbatim (empty when absent).
    pub author: String,

    /// Date attribute, verbatim (empty when absent).
    pub date: String,

    /// Text directly implicated by the change: deleted text for
    /// deletions, inserted text for insertions, the current run's text
    /// for formatting changes, empty for paragraph-format changes.
    pub text: String,

    /// Reconstructed paragraph context with the change marked in place,
    /// or empty when no enclosing paragraph was found.
    pub context: String,

    /// Human-readable attribute delta for formatting changes; empty
    /// otherwise.
    pub detail: String,
}

impl ChangeRecord {
    /// Whether a context rendering is available for this record.
    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_context() {
        let record = ChangeRecord {
            id: 1,
            kind: ChangeKind::Delete,
            author: "reviewer".to_string(),
            date: String::new(),
            text: "gone".to_string(),
            context: String::new(),
            detail: String::new(),
        };
        assert!(!record.has_context());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ChangeKind::ParagraphFormatChange).unwrap();
        assert_eq!(json, "\"paragraph_format_change\"");
    }
}
