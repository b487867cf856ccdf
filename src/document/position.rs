//! Body indexing and table position reconciliation
//!
//! Paragraphs and tables are siblings inside the document body, but they
//! could just as well be reached through two separate accessors; output
//! order only falls out correctly if every table knows where it sits
//! relative to the paragraph sequence. One pass over the body children in
//! source order produces both the ordered paragraph list and, for each
//! table, the number of paragraphs that precede it. The walker consumes
//! this index after it is fully built, never incrementally.

use std::collections::HashMap;

/// Single-pass index over the document body.
///
/// `tables_before[k]` holds the tables (in source order) that appear after
/// paragraph `k - 1`, i.e. immediately before paragraph `k`. Key 0 means
/// the table precedes every paragraph; a key equal to `paragraphs.len()`
/// means the table follows the last paragraph.
pub(crate) struct BodyIndex<'a> {
    pub paragraphs: Vec<&'a docx_rs::Paragraph>,
    pub tables_before: HashMap<usize, Vec<&'a docx_rs::Table>>,
}

pub(crate) fn index_body(document: &docx_rs::Document) -> BodyIndex<'_> {
    let mut index = BodyIndex {
        paragraphs: Vec::new(),
        tables_before: HashMap::new(),
    };

    for child in &document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                index.paragraphs.push(para);
            }
            docx_rs::DocumentChild::Table(table) => {
                index
                    .tables_before
                    .entry(index.paragraphs.len())
                    .or_default()
                    .push(table);
            }
            _ => {
                // Section properties, bookmarks and the like carry no content
            }
        }
    }

    index
}
