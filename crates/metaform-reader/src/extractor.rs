//! Format dispatch

use crate::config::ReaderConfig;
use crate::docx::DocxReader;
use crate::document::{Document, DocumentFormat};
use crate::email::EmailReader;
use crate::error::ReaderError;
use crate::html::HtmlReader;
use crate::ocr::SharedRecognizer;
use crate::pdf::PdfReader;
use crate::plain::PlainTextReader;
use crate::render::PdfiumRenderer;
use std::path::Path;
use tracing::{debug, info};

/// Turns the bytes of one format into text
pub trait FormatReader {
    /// Extract the text of a document in this reader's format
    fn read_text(&self, bytes: &[u8]) -> Result<String, ReaderError>;
}

/// Extracts plain text from any supported document
#[derive(Debug, Clone)]
pub struct DocumentTextExtractor {
    pdf: PdfReader,
    docx: DocxReader,
    email: EmailReader,
    html: HtmlReader,
    plain: PlainTextReader,
}

impl DocumentTextExtractor {
    /// Create an extractor around a PDF reader
    pub fn new(pdf: PdfReader) -> Self {
        Self {
            pdf,
            docx: DocxReader,
            email: EmailReader,
            html: HtmlReader,
            plain: PlainTextReader,
        }
    }

    /// Build from configuration: pdfium rendering plus a lazily built OCR engine
    pub fn from_config(config: &ReaderConfig) -> Result<Self, ReaderError> {
        config.validate().map_err(ReaderError::Config)?;

        let renderer = PdfiumRenderer::new(config.pdfium_library_path.clone(), config.render_scale);
        let recognizer = SharedRecognizer::from_config(config);
        Ok(Self::new(PdfReader::new(renderer, recognizer)))
    }

    /// Extract the text of a document
    ///
    /// PDF failures come back as text starting with `"Error reading PDF:"`;
    /// other formats propagate their errors.
    pub fn extract(&self, document: &Document) -> Result<String, ReaderError> {
        let format = document.format();
        info!("Extracting text from {} as {}", document.name(), format);

        let text = self.reader_for(format).read_text(document.bytes())?;
        debug!("Extracted {} chars", text.len());
        Ok(text)
    }

    /// Load a file and extract its text
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<String, ReaderError> {
        let document = Document::open(path)?;
        self.extract(&document)
    }

    /// Reader used for `format`
    pub fn reader_for(&self, format: DocumentFormat) -> &dyn FormatReader {
        match format {
            DocumentFormat::Pdf => &self.pdf,
            DocumentFormat::Docx => &self.docx,
            DocumentFormat::Eml => &self.email,
            DocumentFormat::Html => &self.html,
            DocumentFormat::PlainText => &self.plain,
        }
    }
}
