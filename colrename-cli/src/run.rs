use anyhow::{Context, Result};
use colrename_core::operations::default_targets;
use colrename_core::{
    format_file_report, format_skip_warning, run_operation, Config, FileOutcome, ModeKind,
    OutputFormatter, RunError, RunLog, RunOptions, ScopeMode,
};
use std::path::Path;

use crate::cli::{Cli, OutputFormat};

/// Merge CLI flags over the config file over built-in defaults
pub fn build_options(cli: &Cli, config: &Config) -> Result<RunOptions> {
    let files = if !cli.files.is_empty() {
        cli.files.clone()
    } else if !config.files.is_empty() {
        config.files.clone()
    } else {
        default_targets()
    };

    let kind = cli.mode.map_or(config.defaults.mode, ModeKind::from);
    let delimiter = cli.delimiter.or(config.defaults.delimiter);

    Ok(RunOptions {
        files,
        table: config.mapping_table()?,
        mode: ScopeMode::new(kind, delimiter),
        dry_run: cli.dry_run,
        show_diff: cli.diff,
    })
}

pub fn open_log(cli: &Cli) -> Result<RunLog> {
    match cli.log_file {
        Some(ref path) => RunLog::open(path)
            .with_context(|| format!("Failed to open log file {}", path.display())),
        None => Ok(RunLog::disabled()),
    }
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => Config::load_from_path(path),
        None => Config::load_from_dir(Path::new(".")),
    }
}

/// Run the renamer, printing progress as each file finishes.
///
/// Returns the run error untouched so the caller can pick the exit code.
pub fn handle_run(
    options: &RunOptions,
    log: &mut RunLog,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<(), RunError> {
    let show_progress = output == OutputFormat::Summary && !quiet;

    if show_progress && !options.table.is_idempotent() {
        for (new, old) in options.table.offending_pairs() {
            eprintln!("Warning: replacement {new} contains old token {old}; a second run will change it again");
        }
    }

    let result = run_operation(options, None, log, |outcome| match outcome {
        FileOutcome::Processed(report) if show_progress => {
            print!("{}", format_file_report(report, options.dry_run, use_color));
        },
        FileOutcome::Skipped { path, .. } if !quiet => {
            eprintln!("{}", format_skip_warning(path, use_color));
        },
        _ => {},
    })?;

    if !quiet {
        let text = result.format(output.into(), use_color);
        match output {
            OutputFormat::Json => println!("{text}"),
            OutputFormat::Summary => print!("{text}"),
        }
    }

    Ok(())
}
