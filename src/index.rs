//! Upward traversal over the markup tree.
//!
//! [`crate::dom::XmlTree`] exposes only parent-to-child links. Revision
//! extraction needs the opposite direction: from a change marker buried
//! anywhere in the tree up to its enclosing paragraph. [`ParentIndex`]
//! records the child-to-parent edge for every node in one traversal and
//! stays valid as long as the source tree is unmodified (the tree is
//! never mutated after parsing).

use crate::dom::{NodeId, Tag, XmlTree};

/// Reverse lookup from every node to its immediate parent.
pub struct ParentIndex {
    parents: Vec<Option<NodeId>>,
}

impl ParentIndex {
    /// Build the index with a single pass over the tree.
    ///
    /// Every parent-child edge is recorded once. If the input were not a
    /// tree the last-written parent would win; this is not validated.
    pub fn build(tree: &XmlTree) -> Self {
        let mut parents = vec![None; tree.len()];
        for id in tree.ids() {
            for &child in &tree.node(id).children {
                parents[child.index()] = Some(id);
            }
        }
        Self { parents }
    }

    /// Immediate parent of `id`, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.index()]
    }

    /// Nearest enclosing paragraph of `id`, starting at `id` itself.
    ///
    /// Returns `None` when the ancestor chain reaches the root without
    /// passing a paragraph; the caller treats that as "no context
    /// available", never as an error.
    pub fn enclosing_paragraph(&self, tree: &XmlTree, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if tree.node(node).tag == Tag::Paragraph {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(xml: &str) -> XmlTree {
        XmlTree::parse(xml).unwrap()
    }

    #[test]
    fn test_parent_of_root_is_none() {
        let t = tree("<w:document><w:body/></w:document>");
        let index = ParentIndex::build(&t);
        assert_eq!(index.parent(t.root()), None);
    }

    #[test]
    fn test_every_child_maps_to_its_parent() {
        let t = tree("<w:body><w:p><w:r><w:t>x</w:t></w:r></w:p><w:p/></w:body>");
        let index = ParentIndex::build(&t);
        for id in t.ids() {
            for &child in &t.node(id).children {
                assert_eq!(index.parent(child), Some(id));
            }
        }
    }

    #[test]
    fn test_enclosing_paragraph_nested() {
        let t = tree("<w:body><w:p><w:ins><w:r><w:t>new</w:t></w:r></w:ins></w:p></w:body>");
        let index = ParentIndex::build(&t);
        let text = t.nodes_with_tag(Tag::Text).next().unwrap();
        let para = t.nodes_with_tag(Tag::Paragraph).next().unwrap();
        assert_eq!(index.enclosing_paragraph(&t, text), Some(para));
    }

    #[test]
    fn test_enclosing_paragraph_of_paragraph_is_itself() {
        let t = tree("<w:body><w:p/></w:body>");
        let index = ParentIndex::build(&t);
        let para = t.nodes_with_tag(Tag::Paragraph).next().unwrap();
        assert_eq!(index.enclosing_paragraph(&t, para), Some(para));
    }

    #[test]
    fn test_no_enclosing_paragraph() {
        let t = tree("<w:body><w:tbl><w:r/></w:tbl></w:body>");
        let index = ParentIndex::build(&t);
        let run = t.nodes_with_tag(Tag::Run).next().unwrap();
        assert_eq!(index.enclosing_paragraph(&t, run), None);
    }

    #[test]
    fn test_nearest_paragraph_wins() {
        // Paragraph nested under another structure that also contains a
        // paragraph higher up does not exist in WML, but the locator must
        // still return the nearest tagged ancestor.
        let t = tree("<w:p><w:other><w:p><w:r><w:t>x</w:t></w:r></w:p></w:other></w:p>");
        let index = ParentIndex::build(&t);
        let text = t.nodes_with_tag(Tag::Text).next().unwrap();
        let inner = t.nodes_with_tag(Tag::Paragraph).nth(1).unwrap();
        assert_eq!(index.enclosing_paragraph(&t, text), Some(inner));
    }
}
