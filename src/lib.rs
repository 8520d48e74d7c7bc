//! # undocx
//!
//! Tracked-change extraction library for DOCX documents.
//!
//! This library reads a WordprocessingML package, collects every tracked
//! change (deletions, insertions, run-formatting changes, paragraph-
//! formatting changes) and reviewer comment, reconstructs the paragraph
//! context around each change, and renders the result as a Markdown or
//! JSON report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{extract_file, render};
//!
//! fn main() -> undocx::Result<()> {
//!     // Extract tracked changes from a DOCX file
//!     let report = extract_file("document.docx")?;
//!
//!     // Convert to Markdown
//!     let markdown = render::to_markdown(&report);
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Inline context**: every change is shown inside its paragraph,
//!   marked up in place (`~~deleted~~`, `**+inserted+**`,
//!   `[format changed: ...]`)
//! - **Marker-anchored excerpts**: long paragraphs are truncated around
//!   the change so it stays visible
//! - **Formatting deltas**: run-property changes are described
//!   attribute-by-attribute (bold, italic, underline, strikethrough,
//!   color, size, highlight)
//! - **Multiple output formats**: Markdown and JSON

pub mod detect;
pub mod dom;
pub mod error;
pub mod extract;
pub mod index;
pub mod model;
pub mod package;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, is_docx_bytes};
pub use dom::{NodeId, Tag, XmlNode, XmlTree};
pub use error::{Error, Result};
pub use extract::{
    describe_format_delta, extract_comments, extract_revisions, render_context, FormatSnapshot,
};
pub use index::ParentIndex;
pub use model::{ChangeKind, ChangeRecord, CommentRecord, ExtractionReport, Summary};
pub use package::DocxPackage;
pub use render::JsonFormat;

use std::path::Path;

/// Extract tracked changes and comments from a DOCX file.
///
/// Fails with [`Error::NotFound`] when the path does not exist. A package
/// without a main document part yields an empty report, not an error.
///
/// # Example
///
/// ```no_run
/// use undocx::extract_file;
///
/// let report = extract_file("document.docx").unwrap();
/// println!("{} revisions", report.revisions.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractionReport> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let package = DocxPackage::open(path)?;
    extract_package(package)
}

/// Extract tracked changes and comments from DOCX bytes.
pub fn extract_bytes(data: Vec<u8>) -> Result<ExtractionReport> {
    let package = DocxPackage::from_bytes(data)?;
    extract_package(package)
}

fn extract_package(mut package: DocxPackage) -> Result<ExtractionReport> {
    let comments = match package.comments_xml()? {
        Some(xml) => extract_comments(&xml)?,
        None => Vec::new(),
    };

    let revisions = match package.document_xml()? {
        Some(xml) => {
            let tree = XmlTree::parse(&xml)?;
            extract_revisions(&tree)
        }
        None => {
            // Legitimate: a package without the main part carries no
            // tracked changes.
            log::warn!("package has no main document part");
            Vec::new()
        }
    };

    Ok(ExtractionReport::new(comments, revisions))
}

/// Extract a DOCX file and render the report as Markdown.
///
/// # Example
///
/// ```no_run
/// use undocx::to_markdown;
///
/// let markdown = to_markdown("document.docx").unwrap();
/// std::fs::write("changes.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let report = extract_file(path)?;
    Ok(render::to_markdown(&report))
}

/// Extract a DOCX file and render the report as JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let report = extract_file(path)?;
    render::to_json(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_file_missing_path() {
        let result = extract_file("definitely/not/here.docx");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_extract_bytes_invalid_container() {
        let result = extract_bytes(b"not a docx".to_vec());
        assert!(result.is_err());
    }
}
