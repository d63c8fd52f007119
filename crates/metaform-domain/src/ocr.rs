//! OCR value types
//!
//! A page goes into a recognizer as a [`RasterPage`] and comes back as a list
//! of [`Recognition`] triples.

/// A rendered page in packed RGB8 layout (3 bytes per pixel, row-major)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterPage {
    /// Zero-based page index within the source document
    pub index: usize,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel data, `width * height * 3` bytes
    pub rgb: Vec<u8>,
}

impl RasterPage {
    /// Create a page from raw RGB8 pixels
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn new(index: usize, width: u32, height: u32, rgb: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        if rgb.len() != expected {
            return None;
        }
        Some(Self {
            index,
            width,
            height,
            rgb,
        })
    }

    /// A uniformly white page, mostly useful for tests
    pub fn blank(index: usize, width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 3;
        Self {
            index,
            width,
            height,
            rgb: vec![255; len],
        }
    }

    /// Check if the page has no pixels at all
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    /// Left edge
    pub left: u32,
    /// Top edge
    pub top: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> u32 {
        self.left.saturating_add(self.width)
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Smallest box covering both `self` and `other`
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(left, top, right - left, bottom - top)
    }
}

/// One recognized text region: geometry, text and engine confidence
///
/// Engines that do not report geometry or confidence leave them as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    /// Where the text was found on the page
    pub bounds: Option<BoundingBox>,
    /// The recognized string
    pub text: String,
    /// Confidence in [0.0, 1.0]
    pub confidence: Option<f32>,
}

impl Recognition {
    /// Recognition carrying only text
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            bounds: None,
            text: text.into(),
            confidence: None,
        }
    }
}
