//! Core data structures for the extracted document representation
//!
//! This module defines the public types produced by a parse: a `Document`
//! holding ordered `Section`s, each holding ordered `ContentItem`s. The
//! serialized form is the structural projection consumed downstream, so the
//! field names here are wire format and must stay stable.

use serde::{Serialize, Serializer};

/// Fixed token emitted for every paragraph that carries an embedded image.
pub const IMAGE_PLACEHOLDER: &str = "[image]";

/// A fully parsed document. Immutable once constructed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Document {
    /// Source file name (not the full path).
    pub source_file: String,
    /// Offset subtracted from raw heading levels so the shallowest heading
    /// becomes level 1; e.g. 2 means H3 was the top level in the source.
    pub heading_depth_offset: u8,
    pub sections: Vec<Section>,
}

/// A contiguous run of content under one heading, or a heading-less preamble.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Section {
    /// Heading text, or `None` for a synthesized preamble section.
    pub heading: Option<String>,
    /// Normalized level: 0 = preamble, 1 = top level, increasing with depth.
    pub level: u8,
    /// Content in source order. Serialized as `paragraphs` to match the
    /// projection the grouping collaborator consumes.
    #[serde(rename = "paragraphs")]
    pub content: Vec<ContentItem>,
}

impl Section {
    pub(crate) fn with_heading(heading: String, level: u8) -> Self {
        Section {
            heading: Some(heading),
            level,
            content: Vec::new(),
        }
    }

    /// Synthesized section for content that precedes the first heading.
    pub(crate) fn preamble() -> Self {
        Section {
            heading: None,
            level: 0,
            content: Vec::new(),
        }
    }
}

/// One unit of section content. A tagged variant rather than a trait
/// hierarchy: the walker only ever appends, and the projection flattens
/// every variant to its markup string.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    /// Paragraph text with markdown inline formatting.
    Paragraph(String),
    /// A single rendered list line (`"  - item"`).
    ListItem(String),
    /// A whole markdown table block.
    Table(String),
    /// Placeholder for one or more embedded images in a paragraph.
    Image,
}

impl ContentItem {
    /// The markup string this item contributes to the projection.
    pub fn as_markup(&self) -> &str {
        match self {
            ContentItem::Paragraph(text)
            | ContentItem::ListItem(text)
            | ContentItem::Table(text) => text,
            ContentItem::Image => IMAGE_PLACEHOLDER,
        }
    }
}

impl Serialize for ContentItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_markup())
    }
}
