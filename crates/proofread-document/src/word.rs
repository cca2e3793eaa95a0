//! Word-processor (OOXML) text extraction

use crate::error::DocumentError;
use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild,
};
use tracing::debug;

/// Extract paragraph text from a `.docx` container, in document order
///
/// Each paragraph is followed by `\n`. Table rows become one line each, with
/// cells separated by `\t`. Styling, images and other embedded objects are
/// dropped. Legacy binary `.doc` files are not OOXML and fail here.
pub(crate) fn extract_word(bytes: &[u8]) -> Result<String, DocumentError> {
    let docx = read_docx(bytes).map_err(|e| DocumentError::ExtractionIo(e.to_string()))?;

    let mut out = String::new();
    let mut paragraphs = 0usize;
    let mut tables = 0usize;

    for child in docx.document.children.iter() {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                push_paragraph(&mut out, paragraph);
                paragraphs += 1;
            }
            DocumentChild::Table(table) => {
                push_table(&mut out, table);
                tables += 1;
            }
            _ => {}
        }
    }

    debug!("Word document: {} paragraphs, {} tables", paragraphs, tables);

    Ok(out)
}

fn push_paragraph(out: &mut String, paragraph: &Paragraph) {
    push_paragraph_children(out, &paragraph.children);
    out.push('\n');
}

fn push_paragraph_children(out: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(out, run),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(out, &link.children),
            ParagraphChild::Insert(insert) => {
                for inserted in &insert.children {
                    if let InsertChild::Run(run) = inserted {
                        push_run(out, run);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(out: &mut String, run: &Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[allow(irrefutable_let_patterns)]
fn push_table(out: &mut String, table: &Table) {
    for row_child in &table.rows {
        let TableChild::TableRow(row) = row_child else {
            continue;
        };
        let mut first = true;
        for cell_child in &row.cells {
            let TableRowChild::TableCell(cell) = cell_child else {
                continue;
            };
            if !first {
                out.push('\t');
            }
            first = false;

            let mut cell_text = String::new();
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        if !cell_text.is_empty() {
                            cell_text.push(' ');
                        }
                        push_paragraph_children(&mut cell_text, &paragraph.children);
                    }
                    TableCellContent::Table(nested) => {
                        let mut nested_text = String::new();
                        push_table(&mut nested_text, nested);
                        cell_text.push_str(nested_text.trim_end());
                    }
                    _ => {}
                }
            }
            out.push_str(&cell_text);
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
    use std::io::Cursor;

    fn pack(docx: Docx) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let bytes = pack(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("First line.")))
                .add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text("Second "))
                        .add_run(Run::new().add_text("line.")),
                ),
        );

        let text = extract_word(&bytes).unwrap();
        assert_eq!(text, "First line.\nSecond line.\n");
    }

    #[test]
    fn test_table_cells_degrade_to_text() {
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("left"))),
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("right"))),
        ])]);

        let bytes = pack(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Intro")))
                .add_table(table),
        );

        let text = extract_word(&bytes).unwrap();
        assert_eq!(text, "Intro\nleft\tright\n");
    }

    #[test]
    fn test_not_a_container() {
        let result = extract_word(b"this is not a zip archive");
        assert!(matches!(result, Err(DocumentError::ExtractionIo(_))));
    }
}
