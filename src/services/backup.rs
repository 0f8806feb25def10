//! Summary extraction from the streamed output of the backup subcommand

use crate::Result;
use crate::models::{FileStats, SnapshotStats};
use crate::services::format::{format_bytes, format_seconds};
use crate::services::messages::messages;
use crate::services::null_as_default;
use serde::Deserialize;
use std::io::Read;

const SUMMARY_MESSAGE: &str = "summary";

/// One message of the backup command's JSON stream.
///
/// Progress messages share the decode target with the final summary, so
/// every field defaults when absent or `null`. File counters stay `None`
/// when the backend does not report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackupSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub message_type: String,
    pub files_new: Option<i64>,
    pub files_changed: Option<i64>,
    pub files_unmodified: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_added: u64,
    pub total_files_processed: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_bytes_processed: u64,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub total_duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub snapshot_id: String,
}

impl BackupSummary {
    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.message_type == SUMMARY_MESSAGE
    }

    /// Map the summary into normalized snapshot statistics for `path`.
    #[must_use]
    pub fn into_snapshot_stats(self, path: &str) -> SnapshotStats {
        // `as` truncates toward zero and saturates negative or NaN input to 0
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let duration_secs = self.total_duration as u64;

        SnapshotStats {
            name: self.snapshot_id,
            path: path.to_string(),
            total_size: format_bytes(self.total_bytes_processed),
            uploaded: format_bytes(self.data_added),
            processing_time: format_seconds(duration_secs),
            file_stats: FileStats {
                total_files: self.total_files_processed,
                new_files: self.files_new,
                modified_files: self.files_changed,
                unmodified_files: self.files_unmodified,
            },
        }
    }
}

/// Extract snapshot statistics from the output of one backup invocation.
///
/// Messages are decoded in order until the summary message. If the stream
/// ends without one, only `path` is populated. Malformed JSON ahead of the
/// summary is returned as [`crate::Error::Decode`].
pub fn extract_backup_info(output: &[u8], path: &str) -> Result<SnapshotStats> {
    extract_backup_info_from_reader(output, path)
}

/// Same as [`extract_backup_info`], reading the output from `reader`.
pub fn extract_backup_info_from_reader<R: Read>(reader: R, path: &str) -> Result<SnapshotStats> {
    let mut skipped = 0usize;

    for message in messages::<R, BackupSummary>(reader) {
        let message = message?;
        if message.is_summary() {
            log::debug!(
                "Found summary for {path} after {skipped} progress messages (snapshot {})",
                message.snapshot_id
            );
            return Ok(message.into_snapshot_stats(path));
        }
        skipped += 1;
    }

    log::warn!("No summary message in backup output for {path} ({skipped} messages read)");
    Ok(SnapshotStats {
        path: path.to_string(),
        ..SnapshotStats::default()
    })
}
