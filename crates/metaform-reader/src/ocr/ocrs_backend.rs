//! Pure-Rust OCR through the `ocrs` engine

use crate::error::OcrError;
use metaform_domain::{RasterPage, Recognition, TextRecognizer};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use std::path::Path;

/// OCR with `ocrs` detection and recognition models
///
/// The engine reports text lines without geometry or confidence.
pub struct OcrsRecognizer {
    engine: OcrEngine,
}

impl OcrsRecognizer {
    /// Load both models from `.rten` files
    pub fn from_model_files(detection: &Path, recognition: &Path) -> Result<Self, OcrError> {
        let detection_model = Model::load_file(detection).map_err(|e| {
            OcrError::EngineUnavailable(format!("detection model {}: {}", detection.display(), e))
        })?;
        let recognition_model = Model::load_file(recognition).map_err(|e| {
            OcrError::EngineUnavailable(format!("recognition model {}: {}", recognition.display(), e))
        })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|e| OcrError::EngineUnavailable(e.to_string()))?;

        Ok(Self { engine })
    }
}

impl TextRecognizer for OcrsRecognizer {
    type Error = OcrError;

    fn recognize(&mut self, page: &RasterPage) -> Result<Vec<Recognition>, Self::Error> {
        let source = ImageSource::from_bytes(&page.rgb, (page.width, page.height))
            .map_err(|e| OcrError::Image(e.to_string()))?;
        let input = self
            .engine
            .prepare_input(source)
            .map_err(|e| OcrError::Engine(e.to_string()))?;

        let words = self
            .engine
            .detect_words(&input)
            .map_err(|e| OcrError::Engine(e.to_string()))?;
        let lines = self.engine.find_text_lines(&input, &words);
        let texts = self
            .engine
            .recognize_text(&input, &lines)
            .map_err(|e| OcrError::Engine(e.to_string()))?;

        Ok(texts
            .into_iter()
            .flatten()
            .map(|line| line.to_string())
            .filter(|text| !text.trim().is_empty())
            .map(Recognition::text_only)
            .collect())
    }
}
