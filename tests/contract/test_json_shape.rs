//! Contract test for the persisted JSON shape

use snapstat::{
    BackupOutput, FileStats, HostBackupStats, HostPhase, RepositoryStats, SnapshotStats,
};
use serde_json::{Value, json};

#[test]
fn test_backup_output_field_names() {
    let output = BackupOutput {
        host_backup_stats: vec![HostBackupStats {
            hostname: "db-0".to_string(),
            phase: Some(HostPhase::Succeeded),
            snapshots: vec![SnapshotStats {
                name: "abcd1234".to_string(),
                path: "/data".to_string(),
                total_size: "4.000 KiB".to_string(),
                uploaded: "2.000 KiB".to_string(),
                processing_time: "1s".to_string(),
                file_stats: FileStats {
                    total_files: Some(14),
                    new_files: Some(3),
                    modified_files: Some(1),
                    unmodified_files: None,
                },
            }],
            duration: "5s".to_string(),
            error: String::new(),
        }],
        repository_stats: RepositoryStats {
            integrity: Some(true),
            size: "1.000 MiB".to_string(),
            snapshot_count: 2,
            snapshots_removed_on_last_cleanup: 4,
        },
    };

    let value = serde_json::to_value(&output).unwrap();

    assert_eq!(
        value,
        json!({
            "hostBackupStats": [{
                "hostname": "db-0",
                "phase": "Succeeded",
                "snapshots": [{
                    "name": "abcd1234",
                    "path": "/data",
                    "totalSize": "4.000 KiB",
                    "uploaded": "2.000 KiB",
                    "processingTime": "1s",
                    "fileStats": {
                        "totalFiles": 14,
                        "newFiles": 3,
                        "modifiedFiles": 1
                    }
                }],
                "duration": "5s"
            }],
            "repository": {
                "integrity": true,
                "size": "1.000 MiB",
                "snapshotCount": 2,
                "snapshotsRemovedOnLastCleanup": 4
            }
        })
    );
}

#[test]
fn test_reader_tolerates_absent_fields() {
    let sparse = r#"{"hostBackupStats":[{"snapshots":[{"path":"/data"}]}]}"#;
    let output: BackupOutput = serde_json::from_str(sparse).unwrap();

    assert_eq!(output.host_backup_stats[0].phase, None);
    assert_eq!(output.host_backup_stats[0].snapshots[0].path, "/data");
    assert_eq!(output.repository_stats, RepositoryStats::default());

    let empty: Value = serde_json::to_value(BackupOutput::default()).unwrap();
    assert_eq!(empty, json!({"repository": {}}));
}
