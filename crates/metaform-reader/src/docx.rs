//! DOCX paragraph extraction

use crate::error::ReaderError;
use crate::extractor::FormatReader;
use docx_rs::{DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};

/// Reader for Office Open XML word processing documents
///
/// Only body paragraphs are read. Tables, headers and footers contribute
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader;

impl DocxReader {
    /// Text of every body paragraph, in document order, empty ones included
    pub fn paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>, ReaderError> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| ReaderError::Docx(format!("{:?}", e)))?;

        Ok(docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect())
    }
}

impl FormatReader for DocxReader {
    fn read_text(&self, bytes: &[u8]) -> Result<String, ReaderError> {
        Ok(self.paragraphs(bytes)?.join("\n"))
    }
}

/// Runs within a paragraph are concatenated with no separator
///
/// Hyperlinks and tracked insertions are read in place. Tracked deletions
/// are not part of the text.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for inserted in &insert.children {
                    if let InsertChild::Run(run) = inserted {
                        push_run(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Hyperlink, HyperlinkType, Insert};
    use std::io::Cursor;

    fn pack(docx: Docx) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();
        buffer.into_inner()
    }

    fn build(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            let paragraph = if text.is_empty() {
                Paragraph::new()
            } else {
                Paragraph::new().add_run(Run::new().add_text(*text))
            };
            docx = docx.add_paragraph(paragraph);
        }
        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let bytes = build(&["First paragraph", "Second paragraph"]);
        let text = DocxReader.read_text(&bytes).unwrap();
        assert_eq!(text, "First paragraph\nSecond paragraph");
    }

    #[test]
    fn test_empty_paragraph_keeps_its_line() {
        let bytes = build(&["a", "", "b"]);
        assert_eq!(DocxReader.paragraphs(&bytes).unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_runs_concatenate() {
        let mut buffer = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Hello, "))
                    .add_run(Run::new().add_text("world")),
            )
            .build()
            .pack(&mut buffer)
            .unwrap();

        let text = DocxReader.read_text(buffer.get_ref()).unwrap();
        assert_eq!(text, "Hello, world");
    }

    #[test]
    fn test_hyperlink_text_is_kept_in_place() {
        let link = Hyperlink::new("https://example.com", HyperlinkType::External)
            .add_run(Run::new().add_text("the site"));
        let bytes = pack(Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("See "))
                .add_hyperlink(link)
                .add_run(Run::new().add_text(" for details")),
        ));

        let text = DocxReader.read_text(&bytes).unwrap();
        assert_eq!(text, "See the site for details");
    }

    #[test]
    fn test_inserted_runs_are_kept() {
        let bytes = pack(Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Total: "))
                .add_insert(Insert::new(Run::new().add_text("42"))),
        ));

        assert_eq!(DocxReader.read_text(&bytes).unwrap(), "Total: 42");
    }

    #[test]
    fn test_document_without_paragraphs_is_empty() {
        let bytes = pack(Docx::new());
        assert_eq!(DocxReader.read_text(&bytes).unwrap(), "");
        assert!(DocxReader.paragraphs(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_archive_is_an_error() {
        let err = DocxReader.read_text(b"not a zip archive").unwrap_err();
        assert!(matches!(err, ReaderError::Docx(_)));
    }
}
