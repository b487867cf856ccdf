//! End-to-end parse tests over real packed .docx files.
//!
//! Fixtures are built in-memory with the docx-rs builder and packed into
//! the temp directory, so the whole path-based pipeline runs: validation,
//! the single file read, and the structure walk.

use std::path::PathBuf;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use docstract::{parse_document, ContentItem, ParseError};

fn fixture_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("docstract-{}-{name}", std::process::id()))
}

fn write_docx(name: &str, docx: Docx) -> PathBuf {
    let path = fixture_path(name);
    let file = std::fs::File::create(&path).expect("create fixture file");
    docx.build().pack(file).expect("pack docx fixture");
    path
}

fn para(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn heading(level: usize, text: &str) -> Paragraph {
    Paragraph::new()
        .style(&format!("Heading{level}"))
        .add_run(Run::new().add_text(text))
}

fn table(rows: &[&[&str]]) -> Table {
    Table::new(
        rows.iter()
            .map(|cells| {
                TableRow::new(
                    cells
                        .iter()
                        .map(|text| TableCell::new().add_paragraph(para(text)))
                        .collect(),
                )
            })
            .collect(),
    )
}

#[test]
fn parses_full_document_structure_from_file() {
    let path = write_docx(
        "full.docx",
        Docx::new()
            .add_paragraph(para("preamble text"))
            .add_paragraph(heading(2, "Background"))
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("plain and "))
                    .add_run(Run::new().add_text("emphatic").bold().italic()),
            )
            .add_table(table(&[&["Key", "Value"], &["a", "1"]]))
            .add_paragraph(heading(3, "Details"))
            .add_paragraph(para("- bullet one")),
    );

    let doc = parse_document(&path).expect("parse fixture");
    std::fs::remove_file(&path).ok();

    assert_eq!(doc.source_file, path.file_name().unwrap().to_string_lossy());
    // Shallowest heading is H2, so the offset is 1 and it normalizes to 1
    assert_eq!(doc.heading_depth_offset, 1);

    assert_eq!(doc.sections.len(), 3);
    assert_eq!(doc.sections[0].heading, None);
    assert_eq!(doc.sections[0].level, 0);

    let background = &doc.sections[1];
    assert_eq!(background.heading.as_deref(), Some("Background"));
    assert_eq!(background.level, 1);
    assert_eq!(
        background.content,
        vec![
            ContentItem::Paragraph("plain and ***emphatic***".into()),
            ContentItem::Table("| Key | Value |\n| --- | --- |\n| a | 1 |".into()),
        ]
    );

    let details = &doc.sections[2];
    assert_eq!(details.level, 2);
    assert_eq!(
        details.content,
        vec![ContentItem::ListItem("- bullet one".into())]
    );
}

#[test]
fn projection_uses_stable_field_names() {
    let path = write_docx(
        "projection.docx",
        Docx::new()
            .add_paragraph(heading(1, "Only"))
            .add_paragraph(para("body")),
    );

    let doc = parse_document(&path).expect("parse fixture");
    std::fs::remove_file(&path).ok();

    let value = serde_json::to_value(&doc).expect("serialize");
    assert!(value["source_file"].is_string());
    assert_eq!(value["heading_depth_offset"], 0);
    assert_eq!(value["sections"][0]["heading"], "Only");
    assert_eq!(value["sections"][0]["level"], 1);
    assert_eq!(value["sections"][0]["paragraphs"][0], "body");
}

#[test]
fn missing_file_fails_as_not_found() {
    let err = parse_document(&fixture_path("never-written.docx")).unwrap_err();
    assert!(matches!(err, ParseError::NotFound(_)));
}

#[test]
fn wrong_extension_fails_as_invalid_format() {
    let path = fixture_path("notes.txt");
    std::fs::write(&path, "plain text, wrong type").expect("write file");

    let err = parse_document(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, ParseError::InvalidFormat { .. }));
}

#[test]
fn garbage_docx_fails_as_invalid_format() {
    let path = fixture_path("garbage.docx");
    std::fs::write(&path, b"\x00\x01 not a zip").expect("write file");

    let err = parse_document(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, ParseError::InvalidFormat { .. }));
}

#[test]
fn empty_document_yields_no_sections() {
    let path = write_docx("empty.docx", Docx::new());

    let doc = parse_document(&path).expect("parse fixture");
    std::fs::remove_file(&path).ok();

    assert_eq!(doc.heading_depth_offset, 0);
    assert!(doc.sections.is_empty());
}
