//! Reviewer comment extraction from the comments part.
//!
//! Comments live in `word/comments.xml` as `w:comment` elements carrying
//! author/date attributes and paragraph content. Anchor text lives in the
//! main document part and is not reconstructed here; the `anchor` field
//! stays empty.

use crate::dom::{Tag, XmlTree};
use crate::error::Result;
use crate::model::CommentRecord;

/// Parse the comments part into ordered records with sequential 1-based
/// ids.
pub fn extract_comments(xml: &str) -> Result<Vec<CommentRecord>> {
    let tree = XmlTree::parse(xml)?;

    let mut records = Vec::new();
    for id in tree.ids() {
        let node = tree.node(id);
        if node.name != "w:comment" {
            continue;
        }

        let paragraphs: Vec<String> = tree
            .descendants(id)
            .into_iter()
            .filter(|&d| tree.node(d).tag == Tag::Paragraph)
            .map(|p| tree.gather_text(p, Tag::Text))
            .collect();
        let text = if paragraphs.is_empty() {
            tree.gather_text(id, Tag::Text)
        } else {
            paragraphs.join("\n")
        };

        records.push(CommentRecord {
            id: records.len() + 1,
            anchor: String::new(),
            author: node.w_attr("author").unwrap_or_default().to_string(),
            date: node.w_attr("date").unwrap_or_default().to_string(),
            text,
        });
    }

    log::debug!("extracted {} comments", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_comments() {
        let xml = r#"<w:comments>
            <w:comment w:id="0" w:author="Alice" w:date="2024-01-01T00:00:00Z">
                <w:p><w:r><w:t>First remark</w:t></w:r></w:p>
            </w:comment>
            <w:comment w:id="1" w:author="Bob">
                <w:p><w:r><w:t>line one</w:t></w:r></w:p>
                <w:p><w:r><w:t>line two</w:t></w:r></w:p>
            </w:comment>
        </w:comments>"#;

        let comments = extract_comments(xml).unwrap();
        assert_eq!(comments.len(), 2);

        assert_eq!(comments[0].id, 1);
        assert_eq!(comments[0].author, "Alice");
        assert_eq!(comments[0].date, "2024-01-01T00:00:00Z");
        assert_eq!(comments[0].text, "First remark");

        assert_eq!(comments[1].id, 2);
        assert_eq!(comments[1].author, "Bob");
        assert_eq!(comments[1].date, "");
        assert_eq!(comments[1].text, "line one\nline two");
    }

    #[test]
    fn test_empty_comments_part() {
        let comments = extract_comments("<w:comments/>").unwrap();
        assert!(comments.is_empty());
    }

    #[test]
    fn test_malformed_comments_part() {
        assert!(extract_comments("<w:comments><w:comment>").is_err());
    }
}
