//! OCR engines and the lazily built shared recognizer

mod tesseract;
#[cfg(feature = "ocrs")]
mod ocrs_backend;

pub use tesseract::TesseractRecognizer;
#[cfg(feature = "ocrs")]
pub use ocrs_backend::OcrsRecognizer;

use crate::config::{OcrBackend, ReaderConfig};
use crate::error::OcrError;
use metaform_domain::{RasterPage, Recognition, TextRecognizer};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::info;

/// A type-erased OCR engine
pub type BoxedRecognizer = Box<dyn TextRecognizer<Error = OcrError> + Send>;

type Factory = dyn Fn() -> Result<BoxedRecognizer, OcrError> + Send + Sync;

/// Handle to an OCR engine that is built at most once
///
/// Clones share the same engine. Construction is deferred until the first
/// page is recognized; a failed construction is not cached, so the next
/// call tries again. Recognition calls are serialized by a mutex.
#[derive(Clone)]
pub struct SharedRecognizer {
    inner: Arc<Inner>,
}

struct Inner {
    engine: OnceCell<Mutex<BoxedRecognizer>>,
    factory: Option<Box<Factory>>,
}

impl SharedRecognizer {
    /// Wrap an already constructed engine
    pub fn new(engine: BoxedRecognizer) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine: OnceCell::with_value(Mutex::new(engine)),
                factory: None,
            }),
        }
    }

    /// Defer construction to `factory`, run on first use
    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> Result<BoxedRecognizer, OcrError> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                engine: OnceCell::new(),
                factory: Some(Box::new(factory)),
            }),
        }
    }

    /// Lazily build the engine selected by `config`
    pub fn from_config(config: &ReaderConfig) -> Self {
        let config = config.clone();
        Self::lazy(move || build_recognizer(&config))
    }

    /// Whether the engine has been constructed
    pub fn is_initialized(&self) -> bool {
        self.inner.engine.get().is_some()
    }

    /// Recognize the text on one page, building the engine if needed
    pub fn recognize(&self, page: &RasterPage) -> Result<Vec<Recognition>, OcrError> {
        let engine = self.inner.engine.get_or_try_init(|| {
            let factory = self.inner.factory.as_ref().ok_or_else(|| {
                OcrError::EngineUnavailable("no engine factory configured".to_string())
            })?;
            info!("Initializing OCR engine");
            factory().map(Mutex::new)
        })?;

        let mut engine = engine.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        engine.recognize(page)
    }
}

impl fmt::Debug for SharedRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRecognizer")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// Construct the OCR engine named by `config`
pub fn build_recognizer(config: &ReaderConfig) -> Result<BoxedRecognizer, OcrError> {
    match config.ocr_backend {
        OcrBackend::Tesseract => Ok(Box::new(TesseractRecognizer::new(
            config.tesseract_binary.clone(),
            config.ocr_language.clone(),
        )?)),
        OcrBackend::Ocrs => build_ocrs(config),
    }
}

#[cfg(feature = "ocrs")]
fn build_ocrs(config: &ReaderConfig) -> Result<BoxedRecognizer, OcrError> {
    let (Some(detection), Some(recognition)) =
        (&config.ocrs_detection_model, &config.ocrs_recognition_model)
    else {
        return Err(OcrError::EngineUnavailable(
            "ocrs backend requires detection and recognition models".to_string(),
        ));
    };
    Ok(Box::new(OcrsRecognizer::from_model_files(detection, recognition)?))
}

#[cfg(not(feature = "ocrs"))]
fn build_ocrs(_config: &ReaderConfig) -> Result<BoxedRecognizer, OcrError> {
    Err(OcrError::EngineUnavailable(
        "metaform-reader was built without the `ocrs` feature".to_string(),
    ))
}
