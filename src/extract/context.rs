//! Context reconstruction around a change node.
//!
//! Given a change marker embedded anywhere inside a paragraph, rebuild a
//! readable rendering of that paragraph: plain text for unrelated
//! siblings, the kind-specific marker substituted exactly where the
//! change sits, and a marker-anchored excerpt when the full rendering is
//! long. Anchoring the excerpt on the marker keeps the change visible; a
//! blind character-offset cut would routinely slice through it.

use crate::dom::{NodeId, Tag, XmlTree};
use crate::index::ParentIndex;
use crate::model::ChangeKind;

/// Rendering length (in chars) above which truncation applies.
const CONTEXT_LIMIT: usize = 200;
/// Characters kept before the marker in a truncated window.
const WINDOW_BEFORE: usize = 50;
/// Characters kept past the end of the literal text in a truncated window.
const WINDOW_AFTER: usize = 80;
/// Length of the literal prefix used to locate the marker.
const PROBE_CHARS: usize = 20;

/// Marked-up token for a change of the given kind.
///
/// Paragraph-format records never carry a marker.
fn marker(kind: ChangeKind, literal: &str) -> String {
    match kind {
        ChangeKind::Delete => format!("~~{literal}~~"),
        ChangeKind::Insert => format!("**+{literal}+**"),
        ChangeKind::FormatChange => format!("[format changed: {literal}]"),
        ChangeKind::ParagraphFormatChange => String::new(),
    }
}

/// Render the enclosing paragraph of `change` with the change marked in
/// place, truncated around the marker when long.
///
/// Returns the empty string when no enclosing paragraph exists; the
/// report layer falls back to a raw marked-up rendering of the literal
/// text alone.
pub fn render_context(
    tree: &XmlTree,
    index: &ParentIndex,
    change: NodeId,
    kind: ChangeKind,
    literal: &str,
) -> String {
    if kind == ChangeKind::ParagraphFormatChange {
        // Paragraph-format records bypass marker substitution entirely.
        return String::new();
    }

    let Some(paragraph) = index.enclosing_paragraph(tree, change) else {
        return String::new();
    };

    let mut context = String::new();
    for &child in &tree.node(paragraph).children {
        if child == change || tree.contains(child, change) {
            context.push_str(&marker(kind, literal));
            continue;
        }

        // Unrelated sibling: plain text first, then any already-present
        // deleted text, each leaf wrapped on its own, in leaf order.
        context.push_str(&tree.gather_text(child, Tag::Text));
        for node in tree.descendants(child) {
            let node = tree.node(node);
            if node.tag == Tag::DeletedText {
                if let Some(text) = &node.text {
                    context.push_str(&format!("~~{text}~~"));
                }
            }
        }
    }

    truncate_around_marker(&context, kind, literal)
}

/// Keep a bounded window around the marker when the rendering is long.
///
/// The marker is located by its kind-specific prefix plus the first
/// [`PROBE_CHARS`] characters of the literal text. A probe found at
/// position 0, or not found at all, leaves the rendering untruncated.
fn truncate_around_marker(context: &str, kind: ChangeKind, literal: &str) -> String {
    let total = context.chars().count();
    if total <= CONTEXT_LIMIT {
        return context.to_string();
    }

    let probe = marker_probe(kind, literal);
    let byte_pos = match context.find(&probe) {
        Some(p) if p > 0 => p,
        _ => return context.to_string(),
    };

    let pos = context[..byte_pos].chars().count();
    let literal_len = literal.chars().count();
    let start = pos.saturating_sub(WINDOW_BEFORE);
    let end = (pos + literal_len + WINDOW_AFTER).min(total);

    let window: String = context.chars().skip(start).take(end - start).collect();
    let mut out = String::new();
    if start > 0 {
        out.push_str("...");
    }
    out.push_str(&window);
    if end < total {
        out.push_str("...");
    }
    out
}

/// Search prefix identifying the marker inside a rendering.
fn marker_probe(kind: ChangeKind, literal: &str) -> String {
    let prefix: String = literal.chars().take(PROBE_CHARS).collect();
    match kind {
        ChangeKind::Delete => format!("~~{prefix}"),
        ChangeKind::Insert => format!("**+{prefix}"),
        ChangeKind::FormatChange => "[format changed".to_string(),
        ChangeKind::ParagraphFormatChange => String::new(),
    }
}
