//! RFC 822 message body extraction

use crate::error::ReaderError;
use crate::extractor::FormatReader;
use crate::html::visible_text;
use crate::plain::decode_lenient;
use mailparse::ParsedMail;
use tracing::debug;

/// Reader for `.eml` messages
///
/// Multipart messages are walked depth-first in document order and the
/// first `text/plain` or `text/html` part wins; HTML parts are reduced to
/// their visible text. A multipart message without either yields an empty
/// string. Single-part messages return their decoded payload as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailReader;

impl FormatReader for EmailReader {
    fn read_text(&self, bytes: &[u8]) -> Result<String, ReaderError> {
        let mail = mailparse::parse_mail(bytes)?;

        if !is_multipart(&mail) {
            return Ok(decode_lenient(&mail.get_body_raw()?));
        }

        match first_text_part(&mail)? {
            Some(text) => Ok(text),
            None => {
                debug!("Multipart message has no text/plain or text/html part");
                Ok(String::new())
            }
        }
    }
}

fn is_multipart(part: &ParsedMail<'_>) -> bool {
    part.ctype.mimetype.to_ascii_lowercase().starts_with("multipart/")
}

fn first_text_part(part: &ParsedMail<'_>) -> Result<Option<String>, ReaderError> {
    let mimetype = part.ctype.mimetype.to_ascii_lowercase();

    if mimetype == "text/plain" {
        return Ok(Some(decode_lenient(&part.get_body_raw()?)));
    }
    if mimetype == "text/html" {
        return Ok(Some(visible_text(&decode_lenient(&part.get_body_raw()?))));
    }

    for subpart in &part.subparts {
        if let Some(text) = first_text_part(subpart)? {
            return Ok(Some(text));
        }
    }

    Ok(None)
}
