//! Tracked-change collection.
//!
//! Each change category is collected in its own full pass over the tree,
//! in document order: deletions, insertions, run-format changes, then
//! paragraph-format changes. Records are sorted by source id afterwards,
//! which keeps within-category order stable since the editing tool
//! assigns ids per change.

pub mod comments;
mod context;
mod format_diff;

pub use comments::extract_comments;
pub use context::render_context;
pub use format_diff::{describe_format_delta, FormatSnapshot};

use crate::dom::{NodeId, Tag, XmlTree};
use crate::index::ParentIndex;
use crate::model::{ChangeKind, ChangeRecord};

/// Fixed detail string for paragraph-format records.
const PARAGRAPH_DETAIL: &str = "paragraph format changed";

/// Detail used when a format-change node carries no prior snapshot.
const FORMAT_FALLBACK_DETAIL: &str = "format changed";

/// Length bound (chars) of the paragraph-format context excerpt.
const PARAGRAPH_CONTEXT_CHARS: usize = 100;

/// Collect every tracked change in the document tree.
///
/// Running this twice over the same tree yields identical record
/// sequences; nothing here depends on ambient state.
pub fn extract_revisions(tree: &XmlTree) -> Vec<ChangeRecord> {
    let index = ParentIndex::build(tree);

    let mut records = Vec::new();
    collect_deletions(tree, &index, &mut records);
    collect_insertions(tree, &index, &mut records);
    collect_format_changes(tree, &index, &mut records);
    collect_paragraph_changes(tree, &index, &mut records);

    // Stable sort: equal ids keep category-pass order.
    records.sort_by_key(|r| r.id);

    log::debug!("collected {} revision records", records.len());
    records
}

fn collect_deletions(tree: &XmlTree, index: &ParentIndex, records: &mut Vec<ChangeRecord>) {
    for node in tree.nodes_with_tag(Tag::Deletion) {
        let text = tree.gather_text(node, Tag::DeletedText);
        if text.trim().is_empty() {
            continue;
        }
        let context = render_context(tree, index, node, ChangeKind::Delete, &text);
        records.push(ChangeRecord {
            id: change_id(tree, node),
            kind: ChangeKind::Delete,
            author: attr_string(tree, node, "author"),
            date: attr_string(tree, node, "date"),
            text,
            context,
            detail: String::new(),
        });
    }
}

fn collect_insertions(tree: &XmlTree, index: &ParentIndex, records: &mut Vec<ChangeRecord>) {
    for node in tree.nodes_with_tag(Tag::Insertion) {
        let text = tree.gather_text(node, Tag::Text);
        if text.trim().is_empty() {
            continue;
        }
        let context = render_context(tree, index, node, ChangeKind::Insert, &text);
        records.push(ChangeRecord {
            id: change_id(tree, node),
            kind: ChangeKind::Insert,
            author: attr_string(tree, node, "author"),
            date: attr_string(tree, node, "date"),
            text,
            context,
            detail: String::new(),
        });
    }
}

fn collect_format_changes(tree: &XmlTree, index: &ParentIndex, records: &mut Vec<ChangeRecord>) {
    for node in tree.nodes_with_tag(Tag::RunFormatChange) {
        // The change node sits inside the current w:rPr, which sits
        // inside the run whose text it formats.
        let current_props = index.parent(node);
        let run = current_props.and_then(|p| index.parent(p));

        // Text after the change: the node records what changed to get here.
        let text = run
            .map(|r| tree.gather_text(r, Tag::Text))
            .unwrap_or_default();

        let old_props = tree
            .node(node)
            .children
            .iter()
            .copied()
            .find(|&child| tree.node(child).tag == Tag::RunProperties);
        let detail = match old_props {
            Some(old) => describe_format_delta(
                &FormatSnapshot::new(tree, Some(old)),
                &FormatSnapshot::new(tree, current_props),
            ),
            None => FORMAT_FALLBACK_DETAIL.to_string(),
        };

        let context = render_context(tree, index, node, ChangeKind::FormatChange, &text);
        records.push(ChangeRecord {
            id: change_id(tree, node),
            kind: ChangeKind::FormatChange,
            author: attr_string(tree, node, "author"),
            date: attr_string(tree, node, "date"),
            text,
            context,
            detail,
        });
    }
}

fn collect_paragraph_changes(tree: &XmlTree, index: &ParentIndex, records: &mut Vec<ChangeRecord>) {
    for node in tree.nodes_with_tag(Tag::ParaFormatChange) {
        let context = index
            .enclosing_paragraph(tree, node)
            .map(|p| truncate_chars(&tree.gather_text(p, Tag::Text), PARAGRAPH_CONTEXT_CHARS))
            .unwrap_or_default();
        records.push(ChangeRecord {
            id: change_id(tree, node),
            kind: ChangeKind::ParagraphFormatChange,
            author: attr_string(tree, node, "author"),
            date: attr_string(tree, node, "date"),
            text: String::new(),
            context,
            detail: PARAGRAPH_DETAIL.to_string(),
        });
    }
}

/// Source change id; 0 when absent or non-numeric.
fn change_id(tree: &XmlTree, node: NodeId) -> u64 {
    tree.node(node)
        .w_attr("id")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn attr_string(tree: &XmlTree, node: NodeId, local: &str) -> String {
    tree.node(node).w_attr(local).unwrap_or_default().to_string()
}

/// First `limit` characters of `s`.
fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}
