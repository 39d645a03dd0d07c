use crate::backup::{backup_path, write_backup};
use crate::error::RenameError;
use crate::log::RunLog;
use crate::mapping::MappingTable;
use crate::replace::MappingCount;
use crate::scope::ScopeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Options for renaming columns in a single file
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub mode: ScopeMode,
    /// Compute counts without writing the backup or the target
    pub dry_run: bool,
    /// Attach a unified diff to the report (dry run only)
    pub show_diff: bool,
}

/// Result for a file that was read and rewritten (or would have been)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Where the backup was written; `None` in dry run
    pub backup_path: Option<PathBuf>,
    pub counts: Vec<MappingCount>,
    pub total: usize,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Processed(FileReport),
    Skipped { path: PathBuf, reason: SkipReason },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Processed(report) => &report.path,
            Self::Skipped { path, .. } => path,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            Self::Processed(report) => report.total,
            Self::Skipped { .. } => 0,
        }
    }
}

/// Rename legacy column literals in one file.
///
/// The original text is backed up to `<path>.bak` before anything else is
/// written, and the target is overwritten only after the whole replacement
/// pass has finished in memory.
pub fn rename_file(
    path: &Path,
    table: &MappingTable,
    options: &RenameOptions,
    log: &mut RunLog,
) -> Result<FileOutcome, RenameError> {
    let original = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log.log(&format!("Skipping {}: not found", path.display()));
            return Ok(FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Missing,
            });
        },
        Err(source) => {
            return Err(RenameError::Read {
                path: path.to_path_buf(),
                source,
            })
        },
    };

    let backup = if options.dry_run {
        None
    } else {
        let backup = write_backup(path, &original)?;
        log.log(&format!("Backed up {} to {}", path.display(), backup.display()));
        Some(backup)
    };

    let replacement = options.mode.apply(&original, table);
    let changed = replacement.changed_from(&original);

    let diff = if options.dry_run && options.show_diff && changed {
        Some(render_diff(path, &original, &replacement.text))
    } else {
        None
    };

    if !options.dry_run {
        fs::write(path, &replacement.text).map_err(|source| RenameError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log.log(&format!(
            "Updated {} ({} replacements)",
            path.display(),
            replacement.total
        ));
    }

    Ok(FileOutcome::Processed(FileReport {
        path: path.to_path_buf(),
        backup_path: backup,
        counts: replacement.counts,
        total: replacement.total,
        changed,
        diff,
    }))
}

/// Unified diff from the would-be backup to the rewritten content
fn render_diff(path: &Path, original: &str, updated: &str) -> String {
    let patch = diffy::create_patch(original, updated).to_string();
    let from = backup_path(path);

    // diffy emits generic headers; name the real files instead
    let mut lines = patch.lines();
    let mut out = String::with_capacity(patch.len());
    if lines.next().is_some_and(|l| l.starts_with("--- ")) {
        out.push_str(&format!("--- {}\n", from.display()));
        if lines.next().is_some_and(|l| l.starts_with("+++ ")) {
            out.push_str(&format!("+++ {}\n", path.display()));
        }
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    } else {
        patch
    }
}
