//! Clap argument definitions for the `kwm` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "kwm")]
#[command(about = "Keyword miner - weighted keyword extraction for web pages")]
pub struct Cli {
    /// Verbosity level (-v for info logs and field summary, -vv for debug logs)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the page to analyze comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct PageSource {
    /// URL of the page to fetch
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Local HTML file to analyze instead of fetching
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `kwm analyze`.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    /// Page to analyze.
    pub source: PageSource,

    /// Maximum keywords to report, 0 for all [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// HTTP timeout in seconds [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `kwm init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.kwm.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `kwm` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract ranked keywords from a page
    #[command(after_help = "\
FIELD WEIGHTS (defaults):
  meta keywords     8
  title             5
  description       3
  h1-h3 headings    1 (each heading counted three times)

EXAMPLES:
  kwm analyze --url https://example.com
  kwm analyze --file page.html -n 10
  kwm analyze --url https://example.com --json")]
    Analyze(AnalyzeCommand),

    /// Initialize kwm configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
