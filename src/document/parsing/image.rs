//! Inline image detection
//!
//! Embedded images live inside runs as `w:drawing` elements. Detection is
//! a boolean per paragraph; the walker emits one placeholder token no
//! matter how many drawings the paragraph holds.

/// True if any run in the paragraph carries a drawing element.
pub(crate) fn contains_image(para: &docx_rs::Paragraph) -> bool {
    para.children.iter().any(|child| {
        if let docx_rs::ParagraphChild::Run(run) = child {
            run.children
                .iter()
                .any(|run_child| matches!(run_child, docx_rs::RunChild::Drawing(_)))
        } else {
            false
        }
    })
}
