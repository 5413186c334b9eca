//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Kitlist - Audit installed Python packages against a requirements manifest.
#[derive(Debug, Parser)]
#[command(name = "kitlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output (problems only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a requirements manifest against installed packages (default)
    Check(CheckArgs),

    /// Apply redaction rules to example text blocks
    Redact(RedactArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Path to the requirements manifest
    #[arg(short, long, default_value = "requirements.txt")]
    pub manifest: PathBuf,

    /// Python interpreter to query for site directories
    #[arg(long, default_value = "python3", value_name = "EXE")]
    pub python: String,

    /// Site directory to scan instead of querying the interpreter (repeatable)
    #[arg(long, value_name = "DIR")]
    pub site: Vec<PathBuf>,

    /// Report only unsatisfied requirements
    #[arg(long)]
    pub gaps_only: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero if any requirement is unsatisfied
    #[arg(long)]
    pub strict: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("requirements.txt"),
            python: "python3".to_string(),
            site: Vec::new(),
            gaps_only: false,
            json: false,
            strict: false,
        }
    }
}

/// Arguments for the `redact` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RedactArgs {
    /// Files to redact, one block each; the built-in demo blocks if omitted
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// YAML rules file replacing the built-in rule list
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
