//! Generic markup tree for WordprocessingML parts.
//!
//! The tree is an arena: nodes live in a `Vec` in document (pre-)order and
//! refer to their ordered children by [`NodeId`]. Nodes expose only
//! downward links; upward traversal is provided separately by
//! [`crate::index::ParentIndex`]. The tree is built once per part and is
//! read-only for the lifetime of extraction.
//!
//! Tag names are classified into the closed [`Tag`] set once at
//! construction, so the extraction passes dispatch on an enum instead of
//! re-comparing strings.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

/// WordprocessingML namespace prefix as it appears in qualified names.
pub const WML_PREFIX: &str = "w:";

/// Closed set of node categories relevant to revision extraction.
///
/// Everything else in the document (tables, fields, bookmarks, section
/// properties) is carried as [`Tag::Other`] and contributes only its text
/// leaves to context reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `w:p` - a paragraph, the unit of context rendering.
    Paragraph,
    /// `w:r` - a run of text sharing one set of properties.
    Run,
    /// `w:t` - a plain text leaf.
    Text,
    /// `w:delText` - a deleted text leaf inside a deletion marker.
    DeletedText,
    /// `w:del` - a tracked deletion.
    Deletion,
    /// `w:ins` - a tracked insertion.
    Insertion,
    /// `w:rPrChange` - a recorded prior run-formatting snapshot.
    RunFormatChange,
    /// `w:pPrChange` - a recorded prior paragraph-formatting snapshot.
    ParaFormatChange,
    /// `w:rPr` - run formatting properties.
    RunProperties,
    /// Any other element.
    Other,
}

impl Tag {
    /// Classify a qualified tag name.
    pub fn classify(name: &str) -> Tag {
        let Some(local) = name.strip_prefix(WML_PREFIX) else {
            return Tag::Other;
        };
        match local {
            "p" => Tag::Paragraph,
            "r" => Tag::Run,
            "t" => Tag::Text,
            "delText" => Tag::DeletedText,
            "del" => Tag::Deletion,
            "ins" => Tag::Insertion,
            "rPrChange" => Tag::RunFormatChange,
            "pPrChange" => Tag::ParaFormatChange,
            "rPr" => Tag::RunProperties,
            _ => Tag::Other,
        }
    }
}

/// Index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A tagged markup node with ordered children and string attributes.
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// Classified tag.
    pub tag: Tag,
    /// Qualified tag name as parsed (e.g. `w:del`).
    pub name: String,
    /// Attributes in document order, keys qualified (e.g. `w:id`).
    pub attrs: Vec<(String, String)>,
    /// Ordered child nodes.
    pub children: Vec<NodeId>,
    /// Accumulated character data, if any.
    pub text: Option<String>,
}

impl XmlNode {
    /// Look up an attribute by its qualified name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a `w:`-prefixed attribute by its local name.
    pub fn w_attr(&self, local: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.strip_prefix(WML_PREFIX) == Some(local))
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed markup tree.
pub struct XmlTree {
    nodes: Vec<XmlNode>,
}

impl XmlTree {
    /// Parse raw markup into a tree.
    ///
    /// Character data is attached to the enclosing element; whitespace is
    /// preserved, since `w:t` leaves carry significant spaces.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        let mut buf = Vec::new();

        let mut nodes: Vec<XmlNode> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let id = push_node(&mut nodes, &stack, &e)?;
                    stack.push(id);
                }
                Ok(Event::Empty(e)) => {
                    push_node(&mut nodes, &stack, &e)?;
                }
                Ok(Event::End(_)) => {
                    stack.pop();
                }
                Ok(Event::Text(t)) => {
                    if let Some(&top) = stack.last() {
                        let text = t
                            .unescape()
                            .map_err(|e| Error::MalformedXml(e.to_string()))?;
                        nodes[top]
                            .text
                            .get_or_insert_with(String::new)
                            .push_str(&text);
                    }
                }
                Ok(Event::CData(t)) => {
                    if let Some(&top) = stack.last() {
                        nodes[top]
                            .text
                            .get_or_insert_with(String::new)
                            .push_str(&String::from_utf8_lossy(&t));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::MalformedXml(e.to_string())),
            }
            buf.clear();
        }

        if nodes.is_empty() {
            return Err(Error::MalformedXml("no root element".to_string()));
        }
        if !stack.is_empty() {
            return Err(Error::MalformedXml("unclosed element at end of input".to_string()));
        }

        Ok(Self { nodes })
    }

    /// Root node of the tree.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Access a node by id.
    pub fn node(&self, id: NodeId) -> &XmlNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Ids of all nodes carrying the given tag, in document order.
    pub fn nodes_with_tag(&self, tag: Tag) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(move |id| self.node(*id).tag == tag)
    }

    /// Pre-order traversal starting at (and including) `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            out.push(n);
            for &child in self.node(n).children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Whether `target` is `ancestor` itself or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, target: NodeId) -> bool {
        self.descendants(ancestor).into_iter().any(|n| n == target)
    }

    /// Concatenated text of all descendant leaves with the given tag, in
    /// document order.
    pub fn gather_text(&self, id: NodeId, tag: Tag) -> String {
        let mut out = String::new();
        for n in self.descendants(id) {
            let node = self.node(n);
            if node.tag == tag {
                if let Some(text) = &node.text {
                    out.push_str(text);
                }
            }
        }
        out
    }
}

fn push_node(
    nodes: &mut Vec<XmlNode>,
    stack: &[usize],
    e: &quick_xml::events::BytesStart<'_>,
) -> Result<usize> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::MalformedXml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::MalformedXml(e.to_string()))?
            .into_owned();
        attrs.push((key, value));
    }

    let id = nodes.len();
    nodes.push(XmlNode {
        tag: Tag::classify(&name),
        name,
        attrs,
        children: Vec::new(),
        text: None,
    });

    if let Some(&parent) = stack.last() {
        nodes[parent].children.push(NodeId(id));
    } else if id != 0 {
        return Err(Error::MalformedXml(
            "multiple root elements".to_string(),
        ));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_tree() {
        let tree = XmlTree::parse(
            r#"<w:document><w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();

        let root = tree.node(tree.root());
        assert_eq!(root.name, "w:document");
        assert_eq!(root.children.len(), 1);

        let paragraphs: Vec<_> = tree.nodes_with_tag(Tag::Paragraph).collect();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(tree.gather_text(paragraphs[0], Tag::Text), "Hello");
    }

    #[test]
    fn test_whitespace_preserved() {
        let tree = XmlTree::parse(r#"<w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>World</w:t></w:r></w:p>"#)
            .unwrap();
        assert_eq!(tree.gather_text(tree.root(), Tag::Text), "Hello World");
    }

    #[test]
    fn test_attributes_unescaped() {
        let tree = XmlTree::parse(r#"<w:del w:id="7" w:author="A &amp; B"/>"#).unwrap();
        let node = tree.node(tree.root());
        assert_eq!(node.tag, Tag::Deletion);
        assert_eq!(node.w_attr("id"), Some("7"));
        assert_eq!(node.w_attr("author"), Some("A & B"));
        assert_eq!(node.w_attr("date"), None);
    }

    #[test]
    fn test_text_entities_unescaped() {
        let tree = XmlTree::parse(r#"<w:t>a &lt; b</w:t>"#).unwrap();
        assert_eq!(tree.node(tree.root()).text.as_deref(), Some("a < b"));
    }

    #[test]
    fn test_document_order() {
        let tree = XmlTree::parse(
            r#"<w:body><w:p><w:t>one</w:t></w:p><w:p><w:t>two</w:t></w:p></w:body>"#,
        )
        .unwrap();
        let texts: Vec<String> = tree
            .nodes_with_tag(Tag::Paragraph)
            .map(|p| tree.gather_text(p, Tag::Text))
            .collect();
        assert_eq!(texts, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_classify_tags() {
        assert_eq!(Tag::classify("w:ins"), Tag::Insertion);
        assert_eq!(Tag::classify("w:rPrChange"), Tag::RunFormatChange);
        assert_eq!(Tag::classify("w:pPrChange"), Tag::ParaFormatChange);
        assert_eq!(Tag::classify("w:tbl"), Tag::Other);
        assert_eq!(Tag::classify("ins"), Tag::Other);
    }

    #[test]
    fn test_malformed_markup() {
        assert!(XmlTree::parse("").is_err());
        assert!(XmlTree::parse("<w:p><w:r></w:p>").is_err());
    }

    #[test]
    fn test_descendants_preorder() {
        let tree =
            XmlTree::parse(r#"<a><b><c/></b><d/></a>"#).unwrap();
        let names: Vec<&str> = tree
            .descendants(tree.root())
            .into_iter()
            .map(|id| tree.node(id).name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }
}
