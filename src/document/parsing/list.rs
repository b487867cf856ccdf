//! List item detection and rendering
//!
//! .docx files rarely say "this is a list" in one place: items arrive as
//! styled paragraphs (`List Bullet 2`), as paragraphs carrying Word's
//! automatic numbering properties, or as plain paragraphs where someone
//! typed the bullet themselves. Each signal is an independent predicate so
//! the walker can stay a dumb priority chain and new heuristics slot in
//! without touching it.

use once_cell::sync::Lazy;
use regex::Regex;

use super::formatting::{paragraph_text, runs_to_markdown};

/// Style identifiers that mark list paragraphs. Compared with spaces
/// stripped so `ListBullet` (style id) and `List Bullet` (display name)
/// both match.
const LIST_STYLE_TOKENS: [&str; 4] = ["listparagraph", "listbullet", "listnumber", "listcontinue"];

/// Bullet glyphs that indicate a hand-typed list item in a normal-style
/// paragraph.
static BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\u{2022}\u{2023}\u{25E6}\u{2043}\u{2219}\-*]\s").expect("valid regex")
});

/// Hand-typed numbering: `1. `, `2) `, ...
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.)]\s").expect("valid regex"));

/// Trailing integer in a style identifier, e.g. `List Bullet 2` -> 2.
static STYLE_INDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*$").expect("valid regex"));

fn style_name(para: &docx_rs::Paragraph) -> Option<&str> {
    para.property.style.as_ref().map(|s| s.val.as_str())
}

/// Style identifier contains a recognized list-style token.
pub(crate) fn has_list_style(para: &docx_rs::Paragraph) -> bool {
    let Some(style) = style_name(para) else {
        return false;
    };
    let normalized: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    LIST_STYLE_TOKENS
        .iter()
        .any(|token| normalized.contains(token))
}

/// Paragraph carries Word's automatic list numbering (`w:numPr`).
pub(crate) fn has_numbering(para: &docx_rs::Paragraph) -> bool {
    para.property.numbering_property.is_some()
}

/// Raw text starts with a bullet glyph or a `1.` / `1)` marker.
pub(crate) fn has_marker_text(text: &str) -> bool {
    BULLET_RE.is_match(text) || NUMBER_RE.is_match(text)
}

/// Heuristic list detection: any one signal is enough.
pub(crate) fn is_list_item(para: &docx_rs::Paragraph) -> bool {
    if has_list_style(para) || has_numbering(para) {
        return true;
    }
    has_marker_text(paragraph_text(para).trim_start())
}

/// Indent level: trailing integer in the style name minus one, else the
/// numbering property's indent level, else 0.
pub(crate) fn indent_level(para: &docx_rs::Paragraph) -> usize {
    if let Some(style) = style_name(para) {
        if let Some(captures) = STYLE_INDENT_RE.captures(style) {
            if let Ok(n) = captures[1].parse::<usize>() {
                return n.saturating_sub(1);
            }
        }
    }

    para.property
        .numbering_property
        .as_ref()
        .and_then(|num_pr| num_pr.level.as_ref())
        .map(|level| level.val)
        .unwrap_or(0)
}

/// Render a list paragraph as one markdown list line, or `None` when
/// nothing is left after the marker is stripped.
pub(crate) fn render_list_item(para: &docx_rs::Paragraph) -> Option<String> {
    let text = runs_to_markdown(para);
    let text = text.trim();

    // Normalize hand-typed markers to the markdown dash
    let text = BULLET_RE.replace(text, "");
    let text = NUMBER_RE.replace(&text, "");
    let text = text.trim();

    if text.is_empty() {
        return None;
    }

    let indent = "  ".repeat(indent_level(para));
    Some(format!("{indent}- {text}"))
}
