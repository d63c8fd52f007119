//! Visible-text extraction for HTML

use crate::error::ReaderError;
use crate::extractor::FormatReader;
use crate::plain::decode_lenient;
use scraper::Html;

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: &[&str] = &["script", "style"];

/// Collect the text nodes of an HTML document, dropping markup
///
/// Text inside `<script>` and `<style>` is skipped. Whitespace between text
/// nodes is kept as it appears in the source.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if !hidden {
            text.push_str(fragment);
        }
    }

    text
}

/// Reader for HTML documents
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReader;

impl FormatReader for HtmlReader {
    fn read_text(&self, bytes: &[u8]) -> Result<String, ReaderError> {
        Ok(visible_text(&decode_lenient(bytes)))
    }
}
