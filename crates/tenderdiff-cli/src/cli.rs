//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tenderdiff_analyzer::TemplateSet;

/// tenderdiff - Summarize, compare and question documents with a local LLM.
#[derive(Debug, Parser)]
#[command(name = "tenderdiff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Model used for every inference call
    #[arg(short, long, global = true, env = "TENDERDIFF_MODEL")]
    pub model: Option<String>,

    /// Ollama endpoint (e.g., http://localhost:11434)
    #[arg(short, long, global = true, env = "TENDERDIFF_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Prompt template family
    #[arg(short, long, value_enum, global = true)]
    pub templates: Option<TemplatesArg>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

/// Prompt template options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TemplatesArg {
    /// Tender extraction and four-category comparison
    Tender,
    /// Generic summary and comparison
    Plain,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize two documents and compare them
    Compare(CompareArgs),

    /// Ask one question about a document
    Ask(AskArgs),

    /// Print the extracted text of a document
    Extract(ExtractArgs),

    /// Compare two documents, then ask follow-up questions interactively
    Session(CompareArgs),
}

/// Arguments for the compare and session commands.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// First document (.txt, .pdf, .docx, .xlsx, .csv)
    pub file1: PathBuf,

    /// Second document
    pub file2: PathBuf,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// Document to question
    pub file: PathBuf,

    /// Question text
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Document to extract
    pub file: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<TemplatesArg> for TemplateSet {
    fn from(templates: TemplatesArg) -> Self {
        match templates {
            TemplatesArg::Tender => TemplateSet::Tender,
            TemplatesArg::Plain => TemplateSet::Plain,
        }
    }
}
