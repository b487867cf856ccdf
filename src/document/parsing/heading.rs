//! Heading detection and level normalization
//!
//! Headings are recognized from the paragraph style identifier alone.
//! Source documents start their hierarchy at arbitrary depths (an outline
//! pasted from another document may use Heading 3 as its top level), so
//! raw levels are shifted by a single document-wide offset that makes the
//! shallowest observed heading level 1.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `Heading<N>` style ids and `Heading N` display names.
static HEADING_STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^heading\s*([1-9])").expect("valid regex"));

/// Raw heading level (1-9) from the paragraph style, or `None` for body text.
pub(crate) fn heading_level(para: &docx_rs::Paragraph) -> Option<u8> {
    let style = para.property.style.as_ref()?;
    let captures = HEADING_STYLE_RE.captures(&style.val)?;
    captures[1].parse().ok()
}

/// Document-wide depth offset: `min(levels) - 1`, or 0 with no headings.
pub(crate) fn depth_offset(levels: &[u8]) -> u8 {
    levels.iter().min().map(|min| min - 1).unwrap_or(0)
}
