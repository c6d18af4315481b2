use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::templates::TemplateId;

/// Predefined expected-data templates for telemetry validation
#[derive(Parser)]
#[command(name = "expected-templates")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Resolve templates from this directory instead of the packaged set
    #[arg(long, global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every predefined template and its locator
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Verify that every predefined template resolves and is readable
    Check {
        /// Attempt every template instead of stopping at the first failure
        #[arg(long, overrides_with = "no_keep_going")]
        keep_going: bool,

        /// Stop at the first failure, even when the config sets `check.keep_going`
        #[arg(long, overrides_with = "keep_going")]
        no_keep_going: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the content of a template
    Show {
        /// Template name (see `list`)
        template: TemplateId,
    },

    /// Print the canonical locator of a template
    Path {
        /// Template name (see `list`)
        template: TemplateId,
    },
}

/// Output format for `list` and `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// Pretty-printed JSON
    Json,
}
