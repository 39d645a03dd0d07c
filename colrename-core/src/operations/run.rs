use crate::error::RenameError;
use crate::log::RunLog;
use crate::mapping::MappingTable;
use crate::renamer::{rename_file, FileOutcome, FileReport, RenameOptions};
use crate::scope::ScopeMode;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Files rewritten when no target list is configured
pub const DEFAULT_TARGETS: &[&str] = &[
    "internal/handlers/handlers.go",
    "internal/handlers/scheduled_posts_worker.go",
    "internal/handlers/realtime_ws.go",
];

pub fn default_targets() -> Vec<PathBuf> {
    DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub files: Vec<PathBuf>,
    pub table: MappingTable,
    pub mode: ScopeMode,
    pub dry_run: bool,
    pub show_diff: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            files: default_targets(),
            table: MappingTable::standard(),
            mode: ScopeMode::default(),
            dry_run: false,
            show_diff: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub mode: ScopeMode,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
    pub total: usize,
}

impl RunResult {
    fn new(mode: ScopeMode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            files: Vec::new(),
            total: 0,
        }
    }

    fn push(&mut self, outcome: FileOutcome) {
        self.total += outcome.total();
        self.files.push(outcome);
    }

    pub fn processed(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter_map(|f| match f {
            FileOutcome::Processed(report) => Some(report),
            FileOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().filter_map(|f| match f {
            FileOutcome::Skipped { path, .. } => Some(path.as_path()),
            FileOutcome::Processed(_) => None,
        })
    }

    pub fn backups(&self) -> impl Iterator<Item = &Path> {
        self.processed().filter_map(|r| r.backup_path.as_deref())
    }
}

/// The run stopped at `path`; `partial` holds everything finished before it
#[derive(Debug, Error)]
#[error("Error processing {}: {source}", .path.display())]
pub struct RunError {
    pub path: PathBuf,
    #[source]
    pub source: RenameError,
    pub partial: RunResult,
}

/// Rename columns in every target, one file at a time.
///
/// Missing targets are skipped. Any other failure stops the run at that
/// file. `on_outcome` sees each file as soon as it is done.
pub fn run_operation<F>(
    options: &RunOptions,
    working_dir: Option<&Path>,
    log: &mut RunLog,
    mut on_outcome: F,
) -> Result<RunResult, RunError>
where
    F: FnMut(&FileOutcome),
{
    log.log(&format!(
        "Starting {}run: mode {}, {} files, {} mappings",
        if options.dry_run { "dry " } else { "" },
        options.mode,
        options.files.len(),
        options.table.len()
    ));

    let rename_options = RenameOptions {
        mode: options.mode,
        dry_run: options.dry_run,
        show_diff: options.show_diff,
    };
    let mut result = RunResult::new(options.mode, options.dry_run);

    for file in &options.files {
        let path = match working_dir {
            Some(dir) if file.is_relative() => dir.join(file),
            _ => file.clone(),
        };

        match rename_file(&path, &options.table, &rename_options, log) {
            Ok(outcome) => {
                on_outcome(&outcome);
                result.push(outcome);
            },
            Err(source) => {
                log.log(&format!("Failed on {}: {source}", path.display()));
                return Err(RunError {
                    path,
                    source,
                    partial: result,
                });
            },
        }
    }

    log.log(&format!(
        "Finished: {} total replacements, {} files skipped",
        result.total,
        result.skipped().count()
    ));

    Ok(result)
}
