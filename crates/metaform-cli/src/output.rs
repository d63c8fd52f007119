//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::*;
use metaform_schema::ComplexityReport;
use serde::Serialize;
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Complexity report with the display labels as keys.
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    #[serde(rename = "Total Fields")]
    total_fields: usize,
    #[serde(rename = "Nesting Depth")]
    nesting_depth: usize,
    #[serde(rename = "Enum Count")]
    enum_count: usize,
    #[serde(rename = "Complexity Score")]
    complexity_score: f64,
    #[serde(rename = "Recommended Strategy")]
    recommended_strategy: &'a str,
}

impl<'a> From<&'a ComplexityReport> for ReportView<'a> {
    fn from(report: &'a ComplexityReport) -> Self {
        Self {
            total_fields: report.metrics.field_count,
            nesting_depth: report.metrics.max_depth,
            enum_count: report.metrics.enum_count,
            complexity_score: report.metrics.score,
            recommended_strategy: report.strategy.label(),
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a complexity report.
    pub fn format_report(&self, report: &ComplexityReport) -> Result<String> {
        let view = ReportView::from(report);
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
            OutputFormat::Table => Ok(self.format_report_table(&view)),
        }
    }

    fn format_report_table(&self, view: &ReportView<'_>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record(["Total Fields".to_string(), view.total_fields.to_string()]);
        builder.push_record(["Nesting Depth".to_string(), view.nesting_depth.to_string()]);
        builder.push_record(["Enum Count".to_string(), view.enum_count.to_string()]);
        builder.push_record(["Complexity Score".to_string(), format!("{:.2}", view.complexity_score)]);
        builder.push_record([
            "Recommended Strategy".to_string(),
            view.recommended_strategy.to_string(),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Pretty-print a JSON value.
    pub fn format_json(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    /// Format the configuration, as TOML in table mode.
    pub fn format_config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table => config.to_toml(),
        }
    }

    /// Format a section heading.
    pub fn section(&self, title: &str) -> String {
        self.colorize(&format!("== {} ==", title), "cyan")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaform_schema::ComplexityMetrics;

    fn report() -> ComplexityReport {
        ComplexityMetrics::from_counts(2, 2, 0).report()
    }

    #[test]
    fn test_report_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("Total Fields"));
        assert!(output.contains("Nesting Depth"));
        assert!(output.contains("12.00"));
        assert!(output.contains("Direct prompt, no schema splitting"));
    }

    #[test]
    fn test_report_json_keys() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&report()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["Total Fields"], 2);
        assert_eq!(value["Nesting Depth"], 2);
        assert_eq!(value["Enum Count"], 0);
        assert_eq!(value["Complexity Score"], 12.0);
        assert_eq!(value["Recommended Strategy"], "Direct prompt, no schema splitting");
    }

    #[test]
    fn test_config_formats() {
        let config = Config::default();
        let toml_out = Formatter::new(OutputFormat::Table, false).format_config(&config).unwrap();
        assert!(toml_out.contains("[extractor]"));

        let json_out = Formatter::new(OutputFormat::Json, false).format_config(&config).unwrap();
        let value: Value = serde_json::from_str(&json_out).unwrap();
        assert_eq!(value["settings"]["format"], "table");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.section("Prompt"), "== Prompt ==");
    }
}
