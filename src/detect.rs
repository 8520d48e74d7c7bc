//! DOCX container detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local-file-header magic bytes: PK\x03\x04.
///
/// A DOCX package is an OPC container, which is always a ZIP archive.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Check that a file looks like a DOCX package.
///
/// Reads the first bytes of the file and validates the ZIP container
/// signature. Part-level validation (presence of `word/document.xml`)
/// happens later in [`crate::package::DocxPackage`].
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// * `Ok(())` if the file starts with a ZIP container header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader.read_exact(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Check that a byte slice starts with a ZIP container header.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if data.len() < ZIP_MAGIC.len() || !data.starts_with(ZIP_MAGIC) {
        return Err(Error::UnknownFormat);
    }
    Ok(())
}

/// Check if a file is a DOCX-shaped container.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent a DOCX-shaped container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
