//! Configuration for the document reader

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// OCR engine used when a PDF has no text layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OcrBackend {
    /// The `tesseract` command-line program
    #[default]
    Tesseract,
    /// The pure-Rust `ocrs` engine (requires the `ocrs` feature)
    Ocrs,
}

/// Configuration for the document reader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// OCR engine to build on first use
    pub ocr_backend: OcrBackend,

    /// Program name or path of the tesseract binary
    pub tesseract_binary: PathBuf,

    /// Tesseract language code
    pub ocr_language: String,

    /// Render scale for scanned pages (1.0 is 72 dpi)
    pub render_scale: f32,

    /// Directory holding the pdfium shared library; system library when unset
    pub pdfium_library_path: Option<PathBuf>,

    /// Text detection model for the ocrs backend
    pub ocrs_detection_model: Option<PathBuf>,

    /// Text recognition model for the ocrs backend
    pub ocrs_recognition_model: Option<PathBuf>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            ocr_backend: OcrBackend::Tesseract,
            tesseract_binary: PathBuf::from("tesseract"),
            ocr_language: "eng".to_string(),
            render_scale: 1.0,
            pdfium_library_path: None,
            ocrs_detection_model: None,
            ocrs_recognition_model: None,
        }
    }
}

impl ReaderConfig {
    /// High-resolution preset: renders scanned pages at 300 dpi
    pub fn high_resolution() -> Self {
        Self {
            render_scale: 300.0 / 72.0,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.render_scale.is_finite() && self.render_scale > 0.0) {
            return Err("render_scale must be a positive number".to_string());
        }
        if self.render_scale > 10.0 {
            return Err("render_scale cannot exceed 10.0".to_string());
        }
        if self.ocr_language.trim().is_empty() {
            return Err("ocr_language cannot be empty".to_string());
        }
        if self.tesseract_binary.as_os_str().is_empty() {
            return Err("tesseract_binary cannot be empty".to_string());
        }
        if self.ocr_backend == OcrBackend::Ocrs
            && (self.ocrs_detection_model.is_none() || self.ocrs_recognition_model.is_none())
        {
            return Err(
                "ocrs backend requires ocrs_detection_model and ocrs_recognition_model".to_string(),
            );
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
