//! Input documents and format classification

use std::fmt;
use std::io::Read;
use std::path::Path;

/// Extension to MIME type table used when the caller gives no hint
const MIME_TABLE: &[(&str, &str)] = &[
    (".pdf", "application/pdf"),
    (
        ".docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (".eml", "message/rfc822"),
    (".html", "text/html"),
    (".htm", "text/html"),
    (".txt", "text/plain"),
    (".md", "text/markdown"),
    (".csv", "text/csv"),
    (".json", "application/json"),
    (".xml", "application/xml"),
];

/// Guess a MIME type from a file name's extension
pub fn guess_mime(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    MIME_TABLE
        .iter()
        .find(|(ext, _)| lower.ends_with(ext))
        .map(|(_, mime)| *mime)
}

/// Document formats with a dedicated reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
    /// RFC 822 email message
    Eml,
    /// HTML page
    Html,
    /// Everything else, decoded as UTF-8
    PlainText,
}

impl DocumentFormat {
    /// Classify from a file name and optional MIME hint
    ///
    /// The lowercased name's suffix decides first (`.pdf`, `.docx`, `.eml`,
    /// `.html`). Otherwise a `text/html` hint selects HTML, and anything left
    /// is plain text.
    pub fn classify(name: &str, mime_hint: Option<&str>) -> Self {
        let lower = name.to_lowercase();

        if lower.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if lower.ends_with(".docx") {
            DocumentFormat::Docx
        } else if lower.ends_with(".eml") {
            DocumentFormat::Eml
        } else if lower.ends_with(".html") || mime_hint.is_some_and(is_html_mime) {
            DocumentFormat::Html
        } else {
            DocumentFormat::PlainText
        }
    }

    /// Short display name
    pub fn label(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Eml => "eml",
            DocumentFormat::Html => "html",
            DocumentFormat::PlainText => "text",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_html_mime(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case("text/html")
}

/// An uploaded document: raw bytes plus the name they arrived under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    mime_hint: Option<String>,
    bytes: Vec<u8>,
}

impl Document {
    /// Create a document, guessing the MIME hint from the name
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_hint = guess_mime(&name).map(str::to_string);
        Self {
            name,
            mime_hint,
            bytes,
        }
    }

    /// Read a whole stream into a document
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> std::io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::new(name, bytes))
    }

    /// Load a document from disk, named after the file
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self::new(name, bytes))
    }

    /// Replace the MIME hint
    pub fn with_mime_hint(mut self, mime: impl Into<String>) -> Self {
        self.mime_hint = Some(mime.into());
        self
    }

    /// File name the document arrived under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME hint, explicit or guessed
    pub fn mime_hint(&self) -> Option<&str> {
        self.mime_hint.as_deref()
    }

    /// Raw content
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Format this document will be read as
    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::classify(&self.name, self.mime_hint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(DocumentFormat::classify("a.pdf", None), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::classify("a.docx", None), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::classify("a.eml", None), DocumentFormat::Eml);
        assert_eq!(DocumentFormat::classify("a.html", None), DocumentFormat::Html);
        assert_eq!(DocumentFormat::classify("a.txt", None), DocumentFormat::PlainText);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(DocumentFormat::classify("SCAN.PDF", None), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::classify("Report.DocX", None), DocumentFormat::Docx);
    }

    #[test]
    fn test_extension_beats_mime_hint() {
        assert_eq!(
            DocumentFormat::classify("a.pdf", Some("text/html")),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_html_mime_hint() {
        assert_eq!(
            DocumentFormat::classify("page", Some("text/html; charset=utf-8")),
            DocumentFormat::Html
        );
        assert_eq!(
            DocumentFormat::classify("page", Some("TEXT/HTML")),
            DocumentFormat::Html
        );
        assert_eq!(
            DocumentFormat::classify("page", Some("text/plain")),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn test_unknown_falls_back_to_plain_text() {
        assert_eq!(DocumentFormat::classify("data.bin", None), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::classify("", None), DocumentFormat::PlainText);
        // No dot, no match
        assert_eq!(DocumentFormat::classify("pdf", None), DocumentFormat::PlainText);
    }

    #[test]
    fn test_htm_is_html_through_guessed_mime() {
        let doc = Document::new("index.htm", b"<p>x</p>".to_vec());
        assert_eq!(doc.mime_hint(), Some("text/html"));
        assert_eq!(doc.format(), DocumentFormat::Html);
    }

    #[test]
    fn test_explicit_mime_hint_overrides_guess() {
        let doc = Document::new("upload", b"<p>x</p>".to_vec()).with_mime_hint("text/html");
        assert_eq!(doc.format(), DocumentFormat::Html);
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("x.PDF"), Some("application/pdf"));
        assert_eq!(guess_mime("x.unknown"), None);
    }

    #[test]
    fn test_from_reader() {
        let doc = Document::from_reader("notes.txt", &b"hello"[..]).unwrap();
        assert_eq!(doc.name(), "notes.txt");
        assert_eq!(doc.bytes(), b"hello");
        assert_eq!(doc.format(), DocumentFormat::PlainText);
    }
}
