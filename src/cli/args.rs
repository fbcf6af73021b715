//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::{ColumnOrder, MissingValuePolicy};

/// Environment variable naming the report directory.
pub const DIR_ENV: &str = "TOOLCENSUS_DIR";

/// toolcensus - Build tool version census for CI farms.
#[derive(Debug, Parser)]
#[command(name = "toolcensus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Extra config file, merged over ~/.toolcensus and .toolcensus configs
    #[arg(short, long, global = true, env = "TOOLCENSUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
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
    /// Probe installed build tools and write this host's report
    Probe(ProbeArgs),

    /// Aggregate host reports into build and test summaries (default)
    Summarize(SummarizeArgs),

    /// Print host reports as console tables or JSON
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Report file to write (default: version.txt)
    #[arg(short, long, conflicts_with = "host")]
    pub output: Option<PathBuf>,

    /// Write the report as <HOST>-versions.txt
    #[arg(long)]
    pub host: Option<String>,

    /// Probe only these tools (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these tools (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// List the probes that would run, without running them
    #[arg(long)]
    pub list: bool,
}

/// Arguments for the `summarize` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SummarizeArgs {
    /// Directory holding <host>-versions.txt files (default: current directory)
    #[arg(short, long, env = "TOOLCENSUS_DIR")]
    pub dir: Option<PathBuf>,

    /// Build host summary path
    #[arg(long)]
    pub build_output: Option<PathBuf>,

    /// Test host summary path
    #[arg(long)]
    pub test_output: Option<PathBuf>,

    /// How table columns are chosen
    #[arg(long, value_enum)]
    pub column_order: Option<ColumnOrder>,

    /// What to do when a host lacks a column
    #[arg(long = "missing", value_enum)]
    pub missing_values: Option<MissingValuePolicy>,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Directory holding <host>-versions.txt files (default: current directory)
    #[arg(short, long, env = "TOOLCENSUS_DIR")]
    pub dir: Option<PathBuf>,

    /// How table columns are chosen
    #[arg(long, value_enum)]
    pub column_order: Option<ColumnOrder>,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
