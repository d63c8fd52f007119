//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::commands::load_schema;
use crate::error::Result;
use crate::output::Formatter;
use metaform_schema::analyze_cached;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, formatter: &Formatter) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let report = analyze_cached(&schema).report();

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
