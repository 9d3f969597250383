//! CLI argument definitions using clap
//!
//! export-map is a single command: scan a directory and print a report.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Summarize the exports of a JavaScript/TypeScript project
#[derive(Parser, Debug)]
#[command(name = "export-map")]
#[command(about = "Map the exported symbols of a JS/TS project into a compact report")]
#[command(version)]
pub struct Cli {
    /// Project directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report format
    #[arg(short, long, default_value = "ai", value_enum)]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// File extension to include (repeatable, replaces the configured list)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Extra name or glob to skip (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Maximum directory depth to descend
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Do not honor .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,

    /// Config file (defaults to .exportmap.toml in the project)
    #[arg(long, value_name = "FILE", env = "EXPORT_MAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact digest for AI assistants
    #[default]
    Ai,
    /// Annotated tree with icons
    Human,
    /// Every section, file and symbol
    #[value(alias = "verbose")]
    Raw,
    /// Plain-text blocks grouped by category
    #[value(alias = "md")]
    Markdown,
    /// Directory tree with exports per file
    Tree,
    /// Structured JSON
    Json,
    /// TOON (Token-Oriented Object Notation)
    Toon,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Scan settings given on the command line
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            extensions: self.extensions.clone(),
            ignore: self.ignore.clone(),
            max_depth: self.max_depth,
            no_gitignore: self.no_gitignore,
        }
    }

    /// Default tracing filter directive for this invocation
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "export_map=debug"
        } else {
            "export_map=warn"
        }
    }
}
