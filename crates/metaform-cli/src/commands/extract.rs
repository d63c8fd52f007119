//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::load_schema;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use metaform_domain::LlmProvider;
use metaform_extractor::{ExtractionRequest, ExtractionResult, JsonExtractor};
use metaform_reader::{Document, DocumentTextExtractor};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Display and output options of one extraction.
#[derive(Debug, Clone, Default)]
pub(crate) struct ExtractOptions {
    pub show_prompt: bool,
    pub show_text: bool,
    pub output: Option<PathBuf>,
}

impl From<&ExtractArgs> for ExtractOptions {
    fn from(args: &ExtractArgs) -> Self {
        Self {
            show_prompt: args.show_prompt,
            show_text: args.show_text,
            output: args.output.clone(),
        }
    }
}

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    // Checked before any document work so a missing key fails fast
    let api_key = args
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(CliError::MissingApiKey)?
        .to_string();

    let schema = load_schema(&args.schema)?;

    let reader = DocumentTextExtractor::from_config(&config.reader)?;
    let mut document = Document::open(&args.file)?;
    if let Some(mime) = &args.mime {
        document = document.with_mime_hint(mime.clone());
    }
    let text = reader.extract(&document)?;

    let mut extractor_config = config.extractor.clone();
    if let Some(model) = &args.model {
        extractor_config.model = model.clone();
    }
    extractor_config.validate().map_err(CliError::Config)?;

    let extractor = JsonExtractor::new(extractor_config.provider(&api_key)?);
    let options = ExtractOptions::from(&args);

    run_extraction(&extractor, ExtractionRequest { schema, text }, &options, formatter)?;
    Ok(())
}

/// Report, extract, print and optionally save one extraction.
pub(crate) fn run_extraction<L>(
    extractor: &JsonExtractor<L>,
    request: ExtractionRequest,
    options: &ExtractOptions,
    formatter: &Formatter,
) -> Result<ExtractionResult>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    let table = formatter.format() == OutputFormat::Table;

    if table {
        let report = extractor.analyze(&request.schema);
        println!("{}", formatter.section("Schema Complexity"));
        println!("{}", formatter.format_report(&report)?);

        if options.show_text {
            println!("{}", formatter.section("Extracted Text"));
            println!("{}", request.text);
        }
        if options.show_prompt {
            println!("{}", formatter.section("Prompt"));
            println!("{}", extractor.prompt_for(&request));
        }
    }

    let result = match extractor.extract(request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", formatter.error("Raw model output:"));
            eprintln!("{}", e.raw_output().unwrap_or("No output returned."));
            return Err(e.into());
        }
    };

    if table {
        println!("{}", formatter.section("Extracted JSON"));
        println!("{}", formatter.format_json(&result.json)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    if let Some(path) = &options.output {
        fs::write(path, serde_json::to_string_pretty(&result.json)?)?;
        info!("Wrote {}", path.display());
        eprintln!("{}", formatter.success(&format!("Saved JSON to {}", path.display())));
    }

    Ok(result)
}
