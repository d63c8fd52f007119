//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Metaform CLI - Turn unstructured documents into JSON that follows a schema.
#[derive(Debug, Parser)]
#[command(name = "metaform")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable tables and sections (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the plain text extracted from a document
    Text(TextArgs),

    /// Show complexity metrics and the recommended strategy for a schema
    Analyze(AnalyzeArgs),

    /// Extract schema-shaped JSON from a document with a language model
    Extract(ExtractArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the text command.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Document to read (txt, pdf, docx, eml, html, ...)
    pub file: PathBuf,

    /// MIME type hint, used when the extension is not recognized
    #[arg(long)]
    pub mime: Option<String>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// JSON schema file
    pub schema: PathBuf,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// JSON schema file
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Document to structure
    pub file: PathBuf,

    /// MIME type hint for the document
    #[arg(long)]
    pub mime: Option<String>,

    /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier, overriding the configuration
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print the prompt sent to the model
    #[arg(long)]
    pub show_prompt: bool,

    /// Print the text extracted from the document
    #[arg(long)]
    pub show_text: bool,

    /// Write the extracted JSON to a file
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = crate::commands::DEFAULT_OUTPUT_FILE
    )]
    pub output: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Render scanned pages at 300 dpi for OCR
        #[arg(long)]
        high_res: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_command() {
        let cli = Cli::parse_from(["metaform", "text", "notes.eml", "--mime", "message/rfc822"]);
        match cli.command {
            Command::Text(args) => {
                assert_eq!(args.file, PathBuf::from("notes.eml"));
                assert_eq!(args.mime.as_deref(), Some("message/rfc822"));
            }
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from([
            "metaform",
            "extract",
            "--schema",
            "schema.json",
            "invoice.pdf",
            "--api-key",
            "sk-test",
            "--show-prompt",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.schema, PathBuf::from("schema.json"));
                assert_eq!(args.file, PathBuf::from("invoice.pdf"));
                assert_eq!(args.api_key.as_deref(), Some("sk-test"));
                assert!(args.show_prompt);
                assert!(!args.show_text);
                assert!(args.output.is_none());
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_output_flag_default_name() {
        let cli = Cli::parse_from([
            "metaform", "extract", "-s", "schema.json", "doc.txt", "--api-key", "k", "--output",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.output, Some(PathBuf::from("extracted_output.json")));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["metaform", "analyze", "s.json", "-vv", "--format", "json", "--no-color"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["metaform", "config", "init", "--force", "--high-res"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force, high_res },
            }) => {
                assert!(force);
                assert!(high_res);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["metaform"]).is_err());
    }
}
