//! Page rasterization through pdfium

use crate::error::RenderError;
use metaform_domain::{PageRenderer, RasterPage};
use pdfium_render::prelude::*;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Decodes and renders PDF pages with pdfium
///
/// The shared library is bound on every call, so a missing pdfium surfaces
/// as an ordinary error rather than at construction.
#[derive(Debug, Clone)]
pub struct PdfiumRenderer {
    library_path: Option<PathBuf>,
    scale: f32,
}

impl PdfiumRenderer {
    /// Create a renderer
    ///
    /// With `library_path`, pdfium is looked up in that directory first and
    /// the system library is the fallback.
    pub fn new(library_path: Option<PathBuf>, scale: f32) -> Self {
        Self {
            library_path,
            scale,
        }
    }

    fn bind(&self) -> Result<Pdfium, RenderError> {
        let bindings = match &self.library_path {
            Some(dir) => {
                let dir = dir.to_string_lossy();
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&*dir))
                    .or_else(|e| {
                        warn!("pdfium not found in {}: {}; trying system library", dir, e);
                        Pdfium::bind_to_system_library()
                    })
            }
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| RenderError::Library(e.to_string()))?;

        Ok(Pdfium::new(bindings))
    }
}

impl PageRenderer for PdfiumRenderer {
    type Error = RenderError;

    fn page_texts(&self, document: &[u8]) -> Result<Vec<String>, Self::Error> {
        let pdfium = self.bind()?;
        let doc = pdfium
            .load_pdf_from_byte_slice(document, None)
            .map_err(|e| RenderError::Document(e.to_string()))?;

        let mut texts = Vec::new();
        for (index, page) in doc.pages().iter().enumerate() {
            let text = page.text().map_err(|e| RenderError::Page {
                index,
                message: e.to_string(),
            })?;
            texts.push(text.all());
        }

        debug!("Decoded text layer of {} page(s)", texts.len());
        Ok(texts)
    }

    fn render_pages(&self, document: &[u8]) -> Result<Vec<RasterPage>, Self::Error> {
        let pdfium = self.bind()?;
        let doc = pdfium
            .load_pdf_from_byte_slice(document, None)
            .map_err(|e| RenderError::Document(e.to_string()))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(self.scale);
        let mut pages = Vec::new();

        for (index, page) in doc.pages().iter().enumerate() {
            let bitmap = page
                .render_with_config(&config)
                .map_err(|e| RenderError::Page {
                    index,
                    message: e.to_string(),
                })?;

            let width = bitmap.width() as u32;
            let height = bitmap.height() as u32;
            let rgb = rgba_to_rgb(&bitmap.as_rgba_bytes());

            let raster = RasterPage::new(index, width, height, rgb).ok_or_else(|| RenderError::Page {
                index,
                message: format!("bitmap size does not match {}x{}", width, height),
            })?;
            debug!("Rendered page {} at {}x{}", index, width, height);
            pages.push(raster);
        }

        Ok(pages)
    }
}

fn rgba_to_rgb(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_rgb_drops_alpha() {
        let rgb = rgba_to_rgb(&[1, 2, 3, 255, 4, 5, 6, 0]);
        assert_eq!(rgb, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unusable_library_dir_falls_back_or_fails_cleanly() {
        let renderer = PdfiumRenderer::new(Some(PathBuf::from("/nonexistent/pdfium")), 1.0);
        // Either the system library is present and the garbage input is
        // rejected, or binding fails; neither panics.
        assert!(renderer.render_pages(b"not a pdf").is_err());
        assert!(renderer.page_texts(b"not a pdf").is_err());
    }
}
