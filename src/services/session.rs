//! Assembly of output records from the captured outputs of one session

use crate::Result;
use crate::models::{
    BackupOutput, HostBackupStats, HostPhase, HostRestoreStats, RestoreOutput,
};
use crate::services::backup::extract_backup_info;
use crate::services::check::extract_check_info;
use crate::services::cleanup::extract_cleanup_info;
use crate::services::format::format_seconds;
use crate::services::stats::extract_stats_info;

/// Builds a [`BackupOutput`] host by host, then applies repository results.
#[derive(Debug, Default)]
pub struct BackupSession {
    output: BackupOutput,
}

impl BackupSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a host from the backup output of each of its source paths.
    ///
    /// If any output fails to decode the host is recorded as failed and the
    /// error is returned.
    pub fn add_host(
        &mut self,
        hostname: &str,
        outputs: &[(String, Vec<u8>)],
        duration_secs: u64,
    ) -> Result<()> {
        let mut snapshots = Vec::with_capacity(outputs.len());
        for (path, output) in outputs {
            match extract_backup_info(output, path) {
                Ok(stats) => snapshots.push(stats),
                Err(e) => {
                    log::error!("Failed to extract backup info for {hostname}:{path}: {e}");
                    self.output.host_backup_stats.push(HostBackupStats {
                        hostname: hostname.to_string(),
                        phase: Some(HostPhase::Failed),
                        snapshots,
                        duration: format_seconds(duration_secs),
                        error: e.to_string(),
                    });
                    return Err(e);
                }
            }
        }

        self.output.host_backup_stats.push(HostBackupStats {
            hostname: hostname.to_string(),
            phase: Some(HostPhase::Succeeded),
            snapshots,
            duration: format_seconds(duration_secs),
            error: String::new(),
        });
        Ok(())
    }

    /// Record a host whose backup did not produce output.
    pub fn add_failed_host(&mut self, hostname: &str, error: &str) {
        self.output.host_backup_stats.push(HostBackupStats {
            hostname: hostname.to_string(),
            phase: Some(HostPhase::Failed),
            error: error.to_string(),
            ..HostBackupStats::default()
        });
    }

    /// Apply the forget output: kept snapshots become the snapshot count.
    pub fn apply_cleanup(&mut self, output: &[u8]) -> Result<()> {
        let (keep, remove) = extract_cleanup_info(output)?;
        self.output.repository_stats.snapshot_count = keep;
        self.output.repository_stats.snapshots_removed_on_last_cleanup = remove;
        Ok(())
    }

    /// Apply the check output.
    pub fn apply_check(&mut self, output: &[u8]) {
        let passed = extract_check_info(output);
        if !passed {
            log::warn!("Repository integrity check did not report success");
        }
        self.output.repository_stats.integrity = Some(passed);
    }

    /// Apply the stats output.
    pub fn apply_stats(&mut self, output: &[u8]) -> Result<()> {
        self.output.repository_stats.size = extract_stats_info(output)?;
        Ok(())
    }

    /// True if any recorded host failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.output
            .host_backup_stats
            .iter()
            .any(|h| h.phase == Some(HostPhase::Failed))
    }

    #[must_use]
    pub fn finish(self) -> BackupOutput {
        self.output
    }
}

/// Builds a [`RestoreOutput`] host by host.
#[derive(Debug, Default)]
pub struct RestoreSession {
    output: RestoreOutput,
}

impl RestoreSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_host(&mut self, hostname: &str, duration_secs: u64) {
        self.output.host_restore_stats.push(HostRestoreStats {
            hostname: hostname.to_string(),
            phase: Some(HostPhase::Succeeded),
            duration: format_seconds(duration_secs),
            error: String::new(),
        });
    }

    pub fn add_failed_host(&mut self, hostname: &str, duration_secs: u64, error: &str) {
        self.output.host_restore_stats.push(HostRestoreStats {
            hostname: hostname.to_string(),
            phase: Some(HostPhase::Failed),
            duration: format_seconds(duration_secs),
            error: error.to_string(),
        });
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.output
            .host_restore_stats
            .iter()
            .any(|h| h.phase == Some(HostPhase::Failed))
    }

    #[must_use]
    pub fn finish(self) -> RestoreOutput {
        self.output
    }
}
