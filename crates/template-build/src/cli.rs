//! CLI argument parsing.

use crate::config::{Mode, StyleDeletion};
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, ValueEnum};

/// Prepares a build tree: copies `src` to `tmp`, converts component
/// templates and styles into modules and rewrites their imports.
#[derive(Debug, Parser)]
#[command(name = "template-build")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Build mode (defaults to production)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Project root the build must be run from (defaults to the nearest
    /// directory containing package.json)
    #[arg(long)]
    pub root: Option<Utf8PathBuf>,

    /// What happens to component.css after conversion (defaults to keep)
    #[arg(long = "style-deletion", value_enum)]
    pub style_deletion: Option<StyleDeletion>,

    /// Summary output format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Exit with error when any single file failed
    #[arg(long = "fail-on-file-errors")]
    pub fail_on_file_errors: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}
