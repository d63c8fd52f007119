//! PDF text extraction with OCR fallback

use crate::error::{OcrError, ReaderError, RenderError};
use crate::extractor::FormatReader;
use crate::ocr::SharedRecognizer;
use metaform_domain::PageRenderer;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Prefix of the text returned when a PDF cannot be read
pub const PDF_ERROR_PREFIX: &str = "Error reading PDF:";

/// Placeholder lopdf emits for text runs in fonts it cannot decode
const LOPDF_UNDECODED_RUN: &str = "?Identity-H Unimplemented?";

/// Shared page renderer
pub type DynRenderer = Arc<dyn PageRenderer<Error = RenderError> + Send + Sync>;

/// Result of reading a PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfOutcome {
    /// Text from the text layer or from OCR
    Text(String),
    /// The pipeline failed; carries the failure description
    RenderFailure(String),
}

impl PdfOutcome {
    /// Flatten into the string handed to callers
    ///
    /// Failures become `"Error reading PDF: <description>"`.
    pub fn into_text(self) -> String {
        match self {
            PdfOutcome::Text(text) => text,
            PdfOutcome::RenderFailure(message) => format!("{} {}", PDF_ERROR_PREFIX, message),
        }
    }

    /// Whether the pipeline failed
    pub fn is_failure(&self) -> bool {
        matches!(self, PdfOutcome::RenderFailure(_))
    }
}

#[derive(Error, Debug)]
enum PdfError {
    #[error("{0}")]
    Parse(#[from] lopdf::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Ocr(#[from] OcrError),
}

/// PDF reader: text layer first, OCR of every page when the layer is blank
///
/// The text layer comes from the page engine; lopdf decodes it when the
/// engine is unavailable.
///
/// Never fails. Any error along the way is reported as a
/// [`PdfOutcome::RenderFailure`].
#[derive(Clone)]
pub struct PdfReader {
    renderer: DynRenderer,
    recognizer: SharedRecognizer,
}

impl PdfReader {
    /// Create a reader from a page renderer and an OCR handle
    pub fn new<R>(renderer: R, recognizer: SharedRecognizer) -> Self
    where
        R: PageRenderer<Error = RenderError> + Send + Sync + 'static,
    {
        Self {
            renderer: Arc::new(renderer),
            recognizer,
        }
    }

    /// Read a PDF
    pub fn read(&self, bytes: &[u8]) -> PdfOutcome {
        match self.try_read(bytes) {
            Ok(text) => PdfOutcome::Text(text),
            Err(e) => {
                warn!("PDF extraction failed: {}", e);
                PdfOutcome::RenderFailure(e.to_string())
            }
        }
    }

    fn try_read(&self, bytes: &[u8]) -> Result<String, PdfError> {
        // Structural parse first: corrupt files never reach the page engine
        let document = lopdf::Document::load_mem(bytes)?;

        let text = match self.renderer.page_texts(bytes) {
            Ok(pages) => pages.join("\n"),
            Err(e) => {
                warn!("Page engine text layer unavailable ({}), decoding with lopdf", e);
                lopdf_text_layer(&document)
            }
        };
        if !text.trim().is_empty() {
            debug!("Using PDF text layer ({} chars)", text.len());
            return Ok(text);
        }

        info!("PDF has no text layer, falling back to OCR");
        self.recognize_pages(bytes)
    }

    fn recognize_pages(&self, bytes: &[u8]) -> Result<String, PdfError> {
        let pages = self.renderer.render_pages(bytes)?;
        debug!("Rendered {} page(s) for OCR", pages.len());

        let mut fragments = Vec::new();
        for page in &pages {
            let recognitions = self.recognizer.recognize(page)?;
            fragments.extend(recognitions.into_iter().map(|r| r.text));
        }

        Ok(fragments.join("\n"))
    }
}

impl std::fmt::Debug for PdfReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfReader")
            .field("recognizer", &self.recognizer)
            .finish_non_exhaustive()
    }
}

impl FormatReader for PdfReader {
    fn read_text(&self, bytes: &[u8]) -> Result<String, ReaderError> {
        Ok(self.read(bytes).into_text())
    }
}

/// Text layer of every page as decoded by lopdf, newline-joined
///
/// Runs in fonts lopdf cannot decode are dropped, and so are pages it fails
/// on, leaving a blank layer that triggers OCR.
fn lopdf_text_layer(document: &lopdf::Document) -> String {
    let mut pages = Vec::new();
    for &number in document.get_pages().keys() {
        let text = match document.extract_text(&[number]) {
            Ok(text) if text.contains(LOPDF_UNDECODED_RUN) => {
                debug!("Page {} uses fonts lopdf cannot decode", number);
                text.replace(LOPDF_UNDECODED_RUN, "")
            }
            Ok(text) => text,
            Err(e) => {
                debug!("Page {} has no decodable text: {}", number, e);
                String::new()
            }
        };
        pages.push(text);
    }

    pages.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_flattens_with_prefix() {
        let text = PdfOutcome::RenderFailure("boom".to_string()).into_text();
        assert_eq!(text, "Error reading PDF: boom");
    }

    #[test]
    fn test_text_flattens_unchanged() {
        assert_eq!(PdfOutcome::Text("abc".to_string()).into_text(), "abc");
        assert!(!PdfOutcome::Text(String::new()).is_failure());
    }

    #[test]
    fn test_garbage_is_not_a_pdf() {
        assert!(lopdf::Document::load_mem(b"definitely not a pdf").is_err());
    }
}
