//! Error handling test for missing and corrupt output files

use snapstat::Error;
use snapstat::io::output::{read_backup_output, read_restore_output, write_output};
use snapstat::BackupOutput;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_output_file() {
    let result = read_backup_output("/nonexistent/path/to/output.json");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_corrupt_output_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"{\"hostRestoreStats\": [").unwrap();
    temp_file.flush().unwrap();

    let result = read_restore_output(temp_file.path());
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[test]
fn test_parent_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let result = write_output(&BackupOutput::default(), blocker.join("output.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_error_display() {
    let err = read_backup_output("/nonexistent/output.json").unwrap_err();
    assert!(err.to_string().starts_with("I/O error"));
}
