//! Extraction report and summary counts.

use serde::{Deserialize, Serialize};

use super::{ChangeKind, ChangeRecord, CommentRecord};

/// The complete result of extracting one package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Reviewer comments in part order.
    pub comments: Vec<CommentRecord>,

    /// Tracked changes sorted by source id.
    pub revisions: Vec<ChangeRecord>,
}

impl ExtractionReport {
    /// Assemble a report from extracted records.
    pub fn new(comments: Vec<CommentRecord>, revisions: Vec<ChangeRecord>) -> Self {
        Self {
            comments,
            revisions,
        }
    }

    /// Per-category counts.
    pub fn summary(&self) -> Summary {
        Summary {
            comments: self.comments.len(),
            deletions: self.count(ChangeKind::Delete),
            insertions: self.count(ChangeKind::Insert),
            format_changes: self.count(ChangeKind::FormatChange),
            paragraph_changes: self.count(ChangeKind::ParagraphFormatChange),
        }
    }

    /// Whether the package carried no comments and no tracked changes.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.revisions.is_empty()
    }

    /// Revisions of one category, in report order.
    pub fn revisions_of(&self, kind: ChangeKind) -> impl Iterator<Item = &ChangeRecord> {
        self.revisions.iter().filter(move |r| r.kind == kind)
    }

    fn count(&self, kind: ChangeKind) -> usize {
        self.revisions_of(kind).count()
    }
}

/// Summary counts for the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of reviewer comments.
    pub comments: usize,
    /// Number of deletion records.
    pub deletions: usize,
    /// Number of insertion records.
    pub insertions: usize,
    /// Number of run-formatting change records.
    pub format_changes: usize,
    /// Number of paragraph-formatting change records.
    pub paragraph_changes: usize,
}
