//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GLR - Fill General Loss Report templates from inspection reports.
#[derive(Debug, Parser)]
#[command(name = "glr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.glr/config.toml)
    #[arg(short, long, global = true, env = "GLR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill a template from one or more reports
    Fill(FillArgs),

    /// List the placeholders a template references
    Placeholders(PlaceholdersArgs),

    /// Run the pattern rules over reports and print what they find
    Extract(ExtractArgs),
}

/// Arguments for the fill command.
#[derive(Debug, Parser)]
pub struct FillArgs {
    /// Template DOCX file
    #[arg(short, long)]
    pub template: PathBuf,

    /// Report PDF file (repeat for several reports)
    #[arg(short, long = "report", required = true)]
    pub reports: Vec<PathBuf>,

    /// Output directory (default: from config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Skip the model call and use pattern rules only
    #[arg(long)]
    pub no_ai: bool,
}

/// Arguments for the placeholders command.
#[derive(Debug, Parser)]
pub struct PlaceholdersArgs {
    /// Template DOCX file
    pub template: PathBuf,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Report PDF file (repeat for several reports)
    #[arg(short, long = "report", required = true)]
    pub reports: Vec<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
