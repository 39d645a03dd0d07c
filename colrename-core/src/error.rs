use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unexpected failures while processing one target file.
///
/// A missing target is not an error; it is reported as a skipped file.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write backup {}: {source}", .path.display())]
    Backup { path: PathBuf, source: io::Error },

    #[error("backup {} does not match the original content", .path.display())]
    BackupMismatch { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl RenameError {
    /// The file the failure is about (the backup path for backup failures)
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Backup { path, .. }
            | Self::BackupMismatch { path }
            | Self::Write { path, .. } => path,
        }
    }
}
