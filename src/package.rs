//! DOCX package reading.
//!
//! A DOCX document is an OPC container: a ZIP archive whose main content
//! lives in `word/document.xml` and whose reviewer comments live in
//! `word/comments.xml`. This module yields the raw markup of those parts;
//! a part that is absent is reported as `None`, not as an error, since
//! many packages legitimately carry no comments (and a few carry no main
//! part at all).

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};

/// Main document part name inside the package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Comments part name inside the package.
const COMMENTS_PART: &str = "word/comments.xml";

/// Maximum decompressed bytes to read from a single ZIP entry (zip-bomb
/// protection).
const MAX_PART_BYTES: u64 = 64 * 1024 * 1024;

/// An opened DOCX package.
pub struct DocxPackage {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl DocxPackage {
    /// Open a DOCX package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Open a DOCX package from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        detect_format_from_bytes(&data)?;
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Raw markup of the main document part, or `None` if the part is
    /// absent from the package.
    pub fn document_xml(&mut self) -> Result<Option<String>> {
        self.read_part(DOCUMENT_PART)
    }

    /// Raw markup of the comments part, or `None` if the part is absent.
    pub fn comments_xml(&mut self) -> Result<Option<String>> {
        self.read_part(COMMENTS_PART)
    }

    fn read_part(&mut self, name: &str) -> Result<Option<String>> {
        let entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut out = Vec::new();
        entry.take(MAX_PART_BYTES).read_to_end(&mut out)?;
        if out.len() as u64 >= MAX_PART_BYTES {
            return Err(Error::Package(format!(
                "part {} exceeds size limit ({} bytes)",
                name, MAX_PART_BYTES
            )));
        }

        let text = String::from_utf8(out)
            .map_err(|e| Error::MalformedXml(format!("part {} is not UTF-8: {}", name, e)))?;
        Ok(Some(text))
    }
}
