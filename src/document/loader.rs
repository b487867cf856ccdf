//! Document loading and the structure walk
//!
//! `parse_document()` is the single entry point: validate the file, read
//! it once, and walk the body into an ordered `Document`. The walk itself
//! is a small state machine over the paragraph sequence; tables were
//! already assigned insertion points by the body index, and headings open
//! and close sections as they appear.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ParseError, Result};

use super::io::validate_docx_file;
use super::models::{ContentItem, Document, Section};
use super::parsing::formatting::{paragraph_text, runs_to_markdown};
use super::parsing::heading::{depth_offset, heading_level};
use super::parsing::image::contains_image;
use super::parsing::list::{is_list_item, render_list_item};
use super::parsing::table::table_to_markdown;
use super::position::index_body;

/// Parse a .docx file into its section structure.
///
/// Fails with `NotFound` for a missing path, `InvalidFormat` for anything
/// that is not a .docx container, and `ParseFailure` for structural
/// problems inside the document. Never returns partial output.
pub fn parse_document(file_path: &Path) -> Result<Document> {
    validate_docx_file(file_path)?;

    let source_file = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string_lossy().into_owned());

    let file_data = std::fs::read(file_path).map_err(|e| {
        ParseError::parse_failure(source_file.as_str(), format!("cannot read file: {e}"))
    })?;
    let docx = docx_rs::read_docx(&file_data)
        .map_err(|e| ParseError::parse_failure(source_file.as_str(), e))?;

    Ok(extract_structure(&docx.document, source_file))
}

/// Walk an in-memory document body into ordered sections.
///
/// Pure function of the body: no I/O, no shared state. Split out from
/// `parse_document` so tests can drive it with builder-constructed bodies.
pub(crate) fn extract_structure(body: &docx_rs::Document, source_file: String) -> Document {
    let index = index_body(body);

    // Global passes: heading depth offset, then the table insertion plan.
    // Both complete before the walk starts.
    let raw_levels: Vec<u8> = index
        .paragraphs
        .iter()
        .filter_map(|para| heading_level(para))
        .collect();
    let offset = depth_offset(&raw_levels);

    // Tables render up front; an empty rendering never enters the plan, so
    // its insertion point is simply never realized.
    let mut pending_tables: HashMap<usize, Vec<String>> = HashMap::new();
    for (&position, tables) in &index.tables_before {
        for table in tables {
            let markdown = table_to_markdown(table);
            if !markdown.is_empty() {
                pending_tables.entry(position).or_default().push(markdown);
            }
        }
    }

    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    for (i, para) in index.paragraphs.iter().enumerate() {
        // Tables that belong between the previous paragraph and this one
        if let Some(tables) = pending_tables.remove(&i) {
            let section = current.get_or_insert_with(Section::preamble);
            section.content.extend(tables.into_iter().map(ContentItem::Table));
        }

        let text = paragraph_text(para);
        let text = text.trim();

        if text.is_empty() {
            // An otherwise-empty paragraph can still hold an image anchor
            if contains_image(para) {
                let section = current.get_or_insert_with(Section::preamble);
                section.content.push(ContentItem::Image);
            }
            continue;
        }

        if let Some(raw_level) = heading_level(para) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::with_heading(text.to_string(), raw_level - offset));
            continue;
        }

        let section = current.get_or_insert_with(Section::preamble);

        // Image wins over text for mixed paragraphs; the caption text is
        // not separately emitted
        if contains_image(para) {
            section.content.push(ContentItem::Image);
            continue;
        }

        if is_list_item(para) {
            if let Some(line) = render_list_item(para) {
                section.content.push(ContentItem::ListItem(line));
            }
            continue;
        }

        let markdown = runs_to_markdown(para);
        if !markdown.trim().is_empty() {
            section.content.push(ContentItem::Paragraph(markdown));
        }
    }

    // Tables after the last paragraph
    if let Some(tables) = pending_tables.remove(&index.paragraphs.len()) {
        let section = current.get_or_insert_with(Section::preamble);
        section.content.extend(tables.into_iter().map(ContentItem::Table));
    }

    if let Some(done) = current.take() {
        sections.push(done);
    }

    Document {
        source_file,
        heading_depth_offset: offset,
        sections,
    }
}
