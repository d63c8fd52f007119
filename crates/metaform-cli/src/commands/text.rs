//! Text command implementation.

use crate::cli::TextArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use metaform_reader::{Document, DocumentTextExtractor};
use serde_json::json;

/// Execute the text command.
pub fn execute_text(args: TextArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let extractor = DocumentTextExtractor::from_config(&config.reader)?;

    let mut document = Document::open(&args.file)?;
    if let Some(mime) = args.mime {
        document = document.with_mime_hint(mime);
    }
    let format = document.format();
    let text = extractor.extract(&document)?;

    match formatter.format() {
        OutputFormat::Json => {
            let value = json!({
                "file": args.file.display().to_string(),
                "format": format.label(),
                "text": text,
            });
            println!("{}", formatter.format_json(&value)?);
        }
        OutputFormat::Table => {
            if text.trim().is_empty() {
                println!("{}", formatter.warning("No text found in document"));
            } else {
                println!("{}", text);
            }
        }
    }

    Ok(())
}
