//! Table rendering
//!
//! Converts a docx table into a markdown table block: first row as header,
//! a separator line, then one line per data row. Cell text is flattened to
//! a single line. A table without rows renders to the empty string and is
//! dropped from the content stream by the caller.

use super::formatting::paragraph_text;

/// Render a table as a markdown block, or an empty string for a table
/// with no rows.
pub(crate) fn table_to_markdown(table: &docx_rs::Table) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells = Vec::new();
        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            cells.push(cell_text(cell));
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return String::new();
    }

    let header = &rows[0];
    let separator = vec!["---"; header.len()];

    let mut lines = vec![
        format!("| {} |", header.join(" | ")),
        format!("| {} |", separator.join(" | ")),
    ];
    for row in &rows[1..] {
        lines.push(format!("| {} |", row.join(" | ")));
    }

    lines.join("\n")
}

/// Flatten a cell to one line: paragraphs joined, line breaks collapsed to
/// single spaces, trimmed.
fn cell_text(cell: &docx_rs::TableCell) -> String {
    let mut text = String::new();

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&paragraph_text(para));
        }
    }

    let collapsed: Vec<&str> = text.split(['\n', '\r']).map(str::trim).collect();
    collapsed.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Paragraph, Run, Table, TableCell, TableRow};

    fn cell(text: &str) -> TableCell {
        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
    }

    fn row(texts: &[&str]) -> TableRow {
        TableRow::new(texts.iter().map(|t| cell(t)).collect())
    }

    #[test]
    fn test_two_by_two_table() {
        let table = Table::new(vec![row(&["Name", "Role"]), row(&["Ada", "Engineer"])]);
        assert_eq!(
            table_to_markdown(&table),
            "| Name | Role |\n| --- | --- |\n| Ada | Engineer |"
        );
    }

    #[test]
    fn test_header_only_table_still_gets_separator() {
        let table = Table::new(vec![row(&["Only", "Header"])]);
        assert_eq!(
            table_to_markdown(&table),
            "| Only | Header |\n| --- | --- |"
        );
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let table = Table::new(vec![]);
        assert_eq!(table_to_markdown(&table), "");
    }

    #[test]
    fn test_cell_line_breaks_collapse_to_spaces() {
        let multi = TableCell::new()
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("first").add_break(
                    docx_rs::BreakType::TextWrapping,
                )),
            )
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("second")));
        let table = Table::new(vec![
            TableRow::new(vec![cell("H")]),
            TableRow::new(vec![multi]),
        ]);
        assert_eq!(
            table_to_markdown(&table),
            "| H |\n| --- |\n| first second |"
        );
    }
}
