//! Run-formatting delta description.
//!
//! A `w:rPrChange` node stores the run properties as they were before the
//! change; the run's current `w:rPr` holds the properties after it. This
//! module compares the two snapshots over a fixed attribute set (bold,
//! italic, underline, strikethrough, color, size, highlight) and produces
//! a short human-readable delta.

use crate::dom::{NodeId, XmlTree, WML_PREFIX};

/// Boolean run properties compared by presence, with their on/off phrases.
const TOGGLE_PROPERTIES: [(&str, &str, &str); 4] = [
    ("b", "**bold**", "un-bold"),
    ("i", "*italic*", "un-italic"),
    ("u", "underline", "un-underline"),
    ("strike", "strikethrough", "un-strikethrough"),
];

/// Read-only view over a run-properties node.
///
/// `node` may be `None` (no current formatting at all); every attribute
/// then reads as absent, which is a defined state rather than an error.
pub struct FormatSnapshot<'a> {
    tree: &'a XmlTree,
    node: Option<NodeId>,
}

impl<'a> FormatSnapshot<'a> {
    /// View over an optional `w:rPr` node.
    pub fn new(tree: &'a XmlTree, node: Option<NodeId>) -> Self {
        Self { tree, node }
    }

    /// First immediate property child with the given local name.
    fn property(&self, local: &str) -> Option<NodeId> {
        let node = self.node?;
        self.tree
            .node(node)
            .children
            .iter()
            .copied()
            .find(|&child| self.tree.node(child).name.strip_prefix(WML_PREFIX) == Some(local))
    }

    /// Whether the property is present.
    pub fn has(&self, local: &str) -> bool {
        self.property(local).is_some()
    }

    /// The property's `w:val` attribute; empty when the property or the
    /// attribute is absent.
    pub fn value(&self, local: &str) -> String {
        self.property(local)
            .and_then(|child| self.tree.node(child).w_attr("val"))
            .unwrap_or_default()
            .to_string()
    }
}

/// Describe the differences between two formatting snapshots.
///
/// Differing attributes each contribute a fixed phrase, joined with
/// `", "`. When nothing differs the result is
/// `"minor formatting adjustment"`.
pub fn describe_format_delta(old: &FormatSnapshot, new: &FormatSnapshot) -> String {
    let mut changes: Vec<String> = Vec::new();

    for (local, on, off) in TOGGLE_PROPERTIES {
        if old.has(local) != new.has(local) {
            changes.push(if new.has(local) { on } else { off }.to_string());
        }
    }

    let old_color = old.value("color");
    let new_color = new.value("color");
    if old_color != new_color {
        if !new_color.is_empty() {
            changes.push(format!("color→#{new_color}"));
        } else if !old_color.is_empty() {
            changes.push(format!("color #{old_color}→default"));
        }
    }

    let old_size = old.value("sz");
    let new_size = new.value("sz");
    if old_size != new_size {
        changes.push(format!(
            "size: {}pt→{}pt",
            half_points_to_pt(&old_size),
            half_points_to_pt(&new_size)
        ));
    }

    if old.has("highlight") != new.has("highlight") {
        if new.has("highlight") {
            changes.push(format!("highlight ({})", new.value("highlight")));
        } else {
            changes.push("un-highlight".to_string());
        }
    }

    if changes.is_empty() {
        "minor formatting adjustment".to_string()
    } else {
        changes.join(", ")
    }
}

/// Render a half-point size value in points (floor); `?` for absent or
/// non-numeric input.
fn half_points_to_pt(value: &str) -> String {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return "?".to_string();
    }
    match value.parse::<u64>() {
        Ok(v) => (v / 2).to_string(),
        Err(_) => "?".to_string(),
    }
}
