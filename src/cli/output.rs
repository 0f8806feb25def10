//! Output formatting for CLI

use crate::models::{BackupOutput, FileStats, HostPhase, RestoreOutput, SnapshotStats};
use std::fmt::Write;

fn phase_label(phase: Option<HostPhase>) -> String {
    phase.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn count_label(count: Option<i64>) -> String {
    count.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn write_file_stats(out: &mut String, stats: &FileStats) {
    let _ = writeln!(
        out,
        "      files: {} total, {} new, {} modified, {} unmodified",
        count_label(stats.total_files),
        count_label(stats.new_files),
        count_label(stats.modified_files),
        count_label(stats.unmodified_files),
    );
}

fn write_snapshot(out: &mut String, snapshot: &SnapshotStats) {
    let _ = writeln!(
        out,
        "    {:<40} {:<12} {:>14} {:>14} {:>10}",
        snapshot.path,
        or_dash(&snapshot.name),
        or_dash(&snapshot.total_size),
        or_dash(&snapshot.uploaded),
        or_dash(&snapshot.processing_time),
    );
    write_file_stats(out, &snapshot.file_stats);
}

/// Render a backup output as human-readable text
#[must_use]
pub fn format_backup_text(output: &BackupOutput) -> String {
    let mut out = String::new();

    if output.host_backup_stats.is_empty() {
        out.push_str("No hosts recorded.\n");
    }

    for host in &output.host_backup_stats {
        let _ = writeln!(
            out,
            "{} [{}] {}",
            or_dash(&host.hostname),
            phase_label(host.phase),
            host.duration
        );
        if !host.error.is_empty() {
            let _ = writeln!(out, "  error: {}", host.error);
        }
        if !host.snapshots.is_empty() {
            let _ = writeln!(
                out,
                "    {:<40} {:<12} {:>14} {:>14} {:>10}",
                "Path", "Snapshot", "Total", "Uploaded", "Time"
            );
        }
        for snapshot in &host.snapshots {
            write_snapshot(&mut out, snapshot);
        }
    }

    let repo = &output.repository_stats;
    let integrity = match repo.integrity {
        Some(true) => "passed",
        Some(false) => "FAILED",
        None => "not checked",
    };
    out.push('\n');
    let _ = writeln!(out, "Repository");
    let _ = writeln!(out, "  integrity: {integrity}");
    let _ = writeln!(out, "  size:      {}", or_dash(&repo.size));
    let _ = writeln!(out, "  snapshots: {}", repo.snapshot_count);
    let _ = writeln!(
        out,
        "  removed:   {}",
        repo.snapshots_removed_on_last_cleanup
    );

    out
}

/// Render a restore output as human-readable text
#[must_use]
pub fn format_restore_text(output: &RestoreOutput) -> String {
    let mut out = String::new();

    if output.host_restore_stats.is_empty() {
        out.push_str("No hosts recorded.\n");
    }

    for host in &output.host_restore_stats {
        let _ = writeln!(
            out,
            "{} [{}] {}",
            or_dash(&host.hostname),
            phase_label(host.phase),
            host.duration
        );
        if !host.error.is_empty() {
            let _ = writeln!(out, "  error: {}", host.error);
        }
    }

    out
}

/// Format a record as pretty JSON
pub fn format_json<T: serde::Serialize>(record: &T) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
}
