use clap::Parser;
use std::path::PathBuf;

use super::types::{ModeArg, OutputFormat};

/// Rewrite quoted camelCase SQL column names to snake_case, keeping a .bak
/// copy of every file it touches
#[derive(Parser, Debug)]
#[command(name = "colrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to rewrite (default: config `files`, else the built-in handler list)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Where replacements may happen
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Block delimiter used by --mode delimited
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Config file (default: .colrename/config.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report what would change without writing backups or files
    #[arg(long)]
    pub dry_run: bool,

    /// Print a unified diff for each file that would change
    #[arg(long, requires = "dry_run")]
    pub diff: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Append timestamped progress to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,
}
