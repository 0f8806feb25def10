//! Data models for snapshot statistics and the persisted output records

use serde::{Deserialize, Serialize};

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// File counters reported by one backup run. `None` means the backend did not report it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_files: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_files: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_files: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmodified_files: Option<i64>,
}

/// Result of one backup run for one source path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStats {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub total_size: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uploaded: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub processing_time: String,
    #[serde(default)]
    pub file_stats: FileStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostPhase {
    Succeeded,
    Failed,
}

impl std::fmt::Display for HostPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostPhase::Succeeded => write!(f, "Succeeded"),
            HostPhase::Failed => write!(f, "Failed"),
        }
    }
}

/// Backup statistics of a single host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostBackupStats {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<HostPhase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snapshots: Vec<SnapshotStats>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Restore statistics of a single host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRestoreStats {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<HostPhase>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Repository state after the last backup session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStats {
    /// `None` when the integrity check was not run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub size: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub snapshot_count: i64,
    /// Snapshots removed by the retention policy during the last cleanup
    #[serde(default, skip_serializing_if = "is_zero")]
    pub snapshots_removed_on_last_cleanup: i64,
}

/// Output of a backup session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupOutput {
    #[serde(
        rename = "hostBackupStats",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub host_backup_stats: Vec<HostBackupStats>,
    #[serde(rename = "repository", default)]
    pub repository_stats: RepositoryStats,
}

/// Output of a restore session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreOutput {
    #[serde(
        rename = "hostRestoreStats",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub host_restore_stats: Vec<HostRestoreStats>,
}
