use crate::error::RenameError;
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

pub const BACKUP_EXTENSION: &str = "bak";

/// `handlers.go` -> `handlers.go.bak`, next to the original
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(BACKUP_EXTENSION);
    PathBuf::from(name)
}

pub fn checksum(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Calculate SHA256 checksum of a file
pub fn calculate_checksum(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Write `content` to the backup location of `path`, overwriting any
/// previous backup, and check the written copy against the original digest.
pub fn write_backup(path: &Path, content: &str) -> Result<PathBuf, RenameError> {
    let backup = backup_path(path);

    fs::write(&backup, content).map_err(|source| RenameError::Backup {
        path: backup.clone(),
        source,
    })?;

    let written = calculate_checksum(&backup).map_err(|source| RenameError::Backup {
        path: backup.clone(),
        source,
    })?;
    if written != checksum(content.as_bytes()) {
        return Err(RenameError::BackupMismatch { path: backup });
    }

    Ok(backup)
}
