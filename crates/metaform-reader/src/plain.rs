//! Universal fallback: lenient UTF-8

use crate::error::ReaderError;
use crate::extractor::FormatReader;

/// Decode bytes as UTF-8, replacing invalid sequences instead of failing
///
/// Each invalid sequence becomes one U+FFFD; nothing is silently dropped, so
/// the model sees where the input was damaged.
pub fn decode_lenient(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Reader for plain text and every unrecognized format
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReader;

impl FormatReader for PlainTextReader {
    fn read_text(&self, bytes: &[u8]) -> Result<String, ReaderError> {
        Ok(decode_lenient(bytes))
    }
}
