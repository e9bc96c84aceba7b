use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "solsniff")]
#[command(author, version, about = "Sniff Solidity source text for known vulnerability patterns")]
#[command(long_about = "A quick-and-dirty scanner that checks a Solidity source file for textual\n\
    patterns correlated with known vulnerability classes. Heuristic by design:\n\
    expect false positives and false negatives.\n\n\
    Exit codes:\n  \
    0 - Report emitted\n  \
    1 - Input file missing or unreadable\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Path to the Solidity source file to scan
    pub file: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wrap column for the text report (overrides config)
    #[arg(long)]
    pub width: Option<usize>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Rule ids to skip (can be specified multiple times)
    #[arg(long = "disable", short = 'D', value_name = "RULE_ID")]
    pub disable: Vec<String>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
