//! Backup Output Statistics Library
//!
//! This library extracts statistics from the captured output of a restic-style
//! backup tool (backup, check, forget and stats subcommands) and persists the
//! normalized results as small JSON documents.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{
    BackupOutput, FileStats, HostBackupStats, HostPhase, HostRestoreStats, RepositoryStats,
    RestoreOutput, SnapshotStats,
};
pub use services::backup::{extract_backup_info, extract_backup_info_from_reader};
pub use services::check::extract_check_info;
pub use services::cleanup::extract_cleanup_info;
pub use services::format::{format_bytes, format_seconds};
pub use services::stats::extract_stats_info;

use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Decode(serde_json::Error),
    InvalidInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Decode(e) => write!(f, "Decode error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // serde_json surfaces reader failures as its own error type
        if err.is_io() {
            return Error::Io(err.into());
        }
        Error::Decode(err)
    }
}

pub type Result<T> = result::Result<T, Error>;
