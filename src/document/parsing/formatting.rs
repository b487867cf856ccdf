//! Text extraction and inline formatting
//!
//! Extracts plain text from docx-rs paragraphs and renders styled runs as
//! markdown inline markup. Run boundaries are not word boundaries, so
//! rendered runs concatenate with no inserted separator.

/// Extract plain text from a paragraph, handling the common child elements.
pub(crate) fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                // Accepted track-changes insertions count as body text
                for insert_child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = insert_child {
                        text.push_str(&run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }

    text
}

/// Extract plain text from a single run.
pub(crate) fn run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => text.push_str(&text_elem.text),
            docx_rs::RunChild::Tab(_) => text.push('\t'),
            docx_rs::RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }

    text
}

/// Render a paragraph's runs as markdown inline markup.
///
/// Bold and italic together wrap in triple emphasis, bold alone in double,
/// italic alone in single; runs with empty text are skipped.
pub(crate) fn runs_to_markdown(para: &docx_rs::Paragraph) -> String {
    let mut parts = String::new();

    for child in &para.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            let text = run_text(run);
            if text.is_empty() {
                continue;
            }

            let props = &run.run_property;
            let bold = props.bold.is_some();
            let italic = props.italic.is_some();

            match (bold, italic) {
                (true, true) => {
                    parts.push_str("***");
                    parts.push_str(&text);
                    parts.push_str("***");
                }
                (true, false) => {
                    parts.push_str("**");
                    parts.push_str(&text);
                    parts.push_str("**");
                }
                (false, true) => {
                    parts.push('*');
                    parts.push_str(&text);
                    parts.push('*');
                }
                (false, false) => parts.push_str(&text),
            }
        }
    }

    parts
}
