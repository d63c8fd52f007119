//! Error types for the reader

use thiserror::Error;

/// Errors that propagate out of non-PDF extraction
#[derive(Error, Debug)]
pub enum ReaderError {
    /// Reading the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// DOCX archive or XML could not be read
    #[error("DOCX error: {0}")]
    Docx(String),

    /// Email message could not be parsed or decoded
    #[error("Email parse error: {0}")]
    Email(#[from] mailparse::MailParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised while rasterizing PDF pages
#[derive(Error, Debug)]
pub enum RenderError {
    /// The pdfium library could not be bound
    #[error("pdfium unavailable: {0}")]
    Library(String),

    /// The document could not be opened for rendering
    #[error("failed to open document for rendering: {0}")]
    Document(String),

    /// A single page failed to render
    #[error("failed to render page {index}: {message}")]
    Page {
        /// Zero-based page index
        index: usize,
        /// Underlying failure
        message: String,
    },
}

/// Errors raised by OCR engines
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine could not be constructed
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The engine failed on a page
    #[error("OCR engine error: {0}")]
    Engine(String),

    /// The page image could not be prepared
    #[error("OCR image error: {0}")]
    Image(String),

    /// Temporary file or process I/O failed
    #[error("OCR I/O error: {0}")]
    Io(#[from] std::io::Error),
}
