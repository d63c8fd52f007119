//! Metaform Reader
//!
//! Normalizes documents of different encodings into one plain-text string.
//!
//! # Overview
//!
//! A [`Document`] (bytes plus a file name) is classified into a
//! [`DocumentFormat`] from its extension and MIME hint, then handed to the
//! matching reader:
//!
//! | Format | Behavior |
//! |---|---|
//! | PDF | Text layer, pages joined by newline; OCR when the layer is blank |
//! | DOCX | Paragraph texts, newline-joined |
//! | EML | First plain-text part, else first HTML part's visible text |
//! | HTML | Visible text, markup stripped |
//! | anything else | Lenient UTF-8 decode |
//!
//! # Failure semantics
//!
//! PDFs never fail: any error in the PDF pipeline is returned as text
//! starting with `"Error reading PDF:"`. Every other format propagates its
//! errors as [`ReaderError`].
//!
//! # Example Usage
//!
//! ```no_run
//! use metaform_reader::{Document, DocumentTextExtractor, ReaderConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = DocumentTextExtractor::from_config(&ReaderConfig::default())?;
//! let document = Document::open("invoice.pdf")?;
//! let text = extractor.extract(&document)?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod docx;
mod document;
mod email;
mod error;
mod extractor;
mod html;
pub mod ocr;
mod pdf;
mod plain;
mod render;

pub use config::{OcrBackend, ReaderConfig};
pub use docx::DocxReader;
pub use document::{guess_mime, Document, DocumentFormat};
pub use email::EmailReader;
pub use error::{OcrError, ReaderError, RenderError};
pub use extractor::{DocumentTextExtractor, FormatReader};
pub use html::{visible_text, HtmlReader};
pub use ocr::SharedRecognizer;
pub use pdf::{PdfOutcome, PdfReader, PDF_ERROR_PREFIX};
pub use plain::{decode_lenient, PlainTextReader};
pub use render::PdfiumRenderer;
