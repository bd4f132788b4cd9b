use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
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
#[command(name = "doxy-guard")]
#[command(author, version, about = "Check and fix Doxygen comments in C++ headers")]
#[command(long_about = "Checks that classes, member variables and public methods in C++ headers \
    carry Doxygen comments written in the house style, and rewrites headers to comply.\n\n\
    Exit codes:\n  \
    0 - No issues found\n  \
    1 - Documentation issues found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report documentation issues without changing files
    Check(CheckArgs),

    /// Rewrite headers so their documentation complies
    Fix(FixArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),

    /// Print the documentation guidelines used for generated comments
    Guidelines(GuidelinesArgs),
}

/// File selection shared by `check` and `fix`.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Headers or directories to process
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Header extensions to scan (comma-separated, e.g., h,hpp)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output format [possible values: text, json, sarif]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long, conflicts_with = "warn_only")]
    pub strict: bool,

    /// Report issues but always exit 0
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct FixArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Use only the offline heuristic generator
    #[arg(long)]
    pub offline: bool,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the rewritten header to stdout instead of writing it (single file only)
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

/// Output format for config show command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format
    Json,
}

#[derive(Parser, Debug)]
pub struct GuidelinesArgs {
    /// Header to show as the reference example instead of the configured one
    #[arg(long)]
    pub reference: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
