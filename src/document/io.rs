//! File validation
//!
//! Checks performed before any parsing starts: the path must exist and the
//! file must be a real .docx container, which means a ZIP archive carrying
//! `word/document.xml`.

use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

use crate::error::{ParseError, Result};

/// Validates that the path points at a legitimate .docx file.
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    if !file_path.exists() {
        return Err(ParseError::NotFound(file_path.to_path_buf()));
    }

    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(ParseError::InvalidFormat {
            path: file_path.to_path_buf(),
            reason: format!("expected a .docx file, got .{extension}"),
        });
    }

    // Check the ZIP structure contains word/document.xml
    let file = File::open(file_path).map_err(|e| {
        ParseError::parse_failure(file_path.to_string_lossy(), format!("cannot open file: {e}"))
    })?;

    let mut archive = ZipArchive::new(file).map_err(|_| ParseError::InvalidFormat {
        path: file_path.to_path_buf(),
        reason: "not a ZIP container".to_string(),
    })?;

    if archive.by_name("word/document.xml").is_err() {
        // A workbook entry means someone renamed an Excel file
        let reason = if archive.by_name("xl/workbook.xml").is_ok() {
            "this is an Excel workbook (.xlsx), not a Word document".to_string()
        } else {
            "missing word/document.xml; the file may be corrupted".to_string()
        };
        return Err(ParseError::InvalidFormat {
            path: file_path.to_path_buf(),
            reason,
        });
    }

    Ok(())
}
