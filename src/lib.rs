//! docstract: extract the section structure of .docx files
//!
//! This library parses Microsoft Word documents into an ordered,
//! hierarchical representation (headings, paragraphs, lists, tables,
//! image placeholders) with markdown inline markup, normalized so the
//! shallowest heading in the source is always level 1. The serialized
//! form is consumed downstream as-is, so the model types double as the
//! wire format.

pub mod document;
pub mod error;

// Re-export commonly used types
pub use document::{parse_document, ContentItem, Document, Section, IMAGE_PLACEHOLDER};
pub use error::{ParseError, Result};
