//! JSON output file read/write operations
//!
//! Backup and restore sessions persist their results as two-space-indented
//! JSON documents that other processes read back later.

use crate::Result;
use crate::models::{BackupOutput, RestoreOutput};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Write `record` as indented JSON to `path`, creating parent directories.
///
/// Existing content at `path` is overwritten.
pub fn write_output<T: Serialize, P: AsRef<Path>>(record: &T, path: P) -> Result<()> {
    let file_path = path.as_ref();
    let json = serde_json::to_string_pretty(record)?;

    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(file_path, json)?;
    log::info!("Wrote output to {}", file_path.display());
    Ok(())
}

fn read_output<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read(path)?;
    let record = serde_json::from_slice(&data)?;
    log::debug!("Read output from {}", path.display());
    Ok(record)
}

/// Read a backup output file.
pub fn read_backup_output<P: AsRef<Path>>(path: P) -> Result<BackupOutput> {
    read_output(path.as_ref())
}

/// Read a restore output file.
pub fn read_restore_output<P: AsRef<Path>>(path: P) -> Result<RestoreOutput> {
    read_output(path.as_ref())
}

impl BackupOutput {
    /// Persist this output as JSON at `path`.
    pub fn write_output<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_output(self, path)
    }
}

impl RestoreOutput {
    /// Persist this output as JSON at `path`.
    pub fn write_output<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_output(self, path)
    }
}
