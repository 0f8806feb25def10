//! Unit tests for CLI argument parsing

use snapstat::cli::args::{Command, SnapshotCapture, parse_args};

fn make_args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parse_backup_with_repository_captures() {
    let argv = make_args(&[
        "snapstat",
        "backup",
        "--output",
        "/tmp/out/output.json",
        "--host",
        "db-0",
        "--snapshot",
        "/var/lib/db=/tmp/db.json",
        "--snapshot",
        "/etc=/tmp/etc.json",
        "--duration",
        "62",
        "--forget",
        "forget.json",
        "--check",
        "check.txt",
    ]);

    let parsed = parse_args(&argv).expect("parse backup args");
    let Command::Backup(backup) = parsed.command else {
        panic!("expected backup command");
    };

    assert_eq!(backup.output, "/tmp/out/output.json");
    assert_eq!(backup.host.as_deref(), Some("db-0"));
    assert_eq!(backup.duration_secs, 62);
    assert_eq!(
        backup.snapshots,
        vec![
            SnapshotCapture {
                path: "/var/lib/db".to_string(),
                file: "/tmp/db.json".to_string(),
            },
            SnapshotCapture {
                path: "/etc".to_string(),
                file: "/tmp/etc.json".to_string(),
            },
        ]
    );
    assert_eq!(backup.forget.as_deref(), Some("forget.json"));
    assert_eq!(backup.check.as_deref(), Some("check.txt"));
    assert!(backup.stats.is_none());
}

#[test]
fn backup_requires_output_and_snapshot() {
    let no_output = make_args(&["snapstat", "backup", "--snapshot", "/a=/b"]);
    assert!(parse_args(&no_output).is_err());

    let no_snapshot = make_args(&["snapstat", "backup", "--output", "o.json"]);
    assert!(parse_args(&no_snapshot).is_err());
}

#[test]
fn backup_rejects_malformed_snapshot_capture() {
    for bad in ["/data", "=file.json", "/data="] {
        let argv = make_args(&["snapstat", "backup", "--output", "o.json", "--snapshot", bad]);
        let err = parse_args(&argv).unwrap_err();
        assert!(err.contains("<PATH>=<FILE>"), "{bad}: {err}");
    }
}

#[test]
fn parse_restore_with_error() {
    let argv = make_args(&[
        "snapstat",
        "restore",
        "--output",
        "restore.json",
        "--error",
        "snapshot not found",
    ]);

    let parsed = parse_args(&argv).expect("parse restore args");
    let Command::Restore(restore) = parsed.command else {
        panic!("expected restore command");
    };

    assert_eq!(restore.error.as_deref(), Some("snapshot not found"));
    assert_eq!(restore.duration_secs, 0);
    assert!(restore.host.is_none());
}

#[test]
fn parse_show_flags() {
    let argv = make_args(&["snapstat", "show", "out.json", "--restore", "--json"]);

    let parsed = parse_args(&argv).expect("parse show args");
    let Command::Show(show) = parsed.command else {
        panic!("expected show command");
    };

    assert_eq!(show.file, "out.json");
    assert!(show.restore);
    assert!(show.json);
}

#[test]
fn invalid_duration_and_unknown_command() {
    let argv = make_args(&["snapstat", "restore", "--output", "o.json", "--duration", "1.5"]);
    assert!(parse_args(&argv).is_err());

    let argv = make_args(&["snapstat", "prune"]);
    assert_eq!(parse_args(&argv).unwrap_err(), "Unknown command: prune");

    let argv = make_args(&["snapstat", "backup", "--output"]);
    assert_eq!(parse_args(&argv).unwrap_err(), "--output requires a value");
}
