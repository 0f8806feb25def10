//! Extraction over realistic captured backup streams

use crate::fixtures::BACKUP_STREAM;
use snapstat::{Error, extract_backup_info, extract_backup_info_from_reader, format_bytes, format_seconds};
use std::fs::File;
use tempfile::TempDir;

#[test]
fn test_summary_from_captured_stream() {
    let stats = extract_backup_info(BACKUP_STREAM.as_bytes(), "/data").unwrap();

    assert_eq!(stats.path, "/data");
    assert_eq!(stats.name, "abcd1234");
    assert_eq!(stats.file_stats.new_files, Some(3));
    assert_eq!(stats.file_stats.modified_files, Some(1));
    assert_eq!(stats.file_stats.unmodified_files, Some(10));
    assert_eq!(stats.file_stats.total_files, Some(14));
    assert_eq!(stats.uploaded, format_bytes(2048));
    assert_eq!(stats.total_size, format_bytes(4096));
    assert_eq!(stats.processing_time, format_seconds(1));
}

#[test]
fn test_summary_from_file_reader() {
    let temp_dir = TempDir::new().unwrap();
    let path = crate::fixtures::write_capture(temp_dir.path(), "backup.json", BACKUP_STREAM)
        .unwrap();

    let stats = extract_backup_info_from_reader(File::open(path).unwrap(), "/data").unwrap();

    assert_eq!(stats.name, "abcd1234");
}

#[test]
fn test_progress_only_stream() {
    let progress: String = BACKUP_STREAM
        .lines()
        .filter(|line| !line.contains("\"summary\""))
        .collect::<Vec<_>>()
        .join("\n");

    let stats = extract_backup_info(progress.as_bytes(), "/data").unwrap();

    assert_eq!(stats.path, "/data");
    assert!(stats.name.is_empty());
    assert!(stats.uploaded.is_empty());
    assert!(stats.total_size.is_empty());
    assert!(stats.processing_time.is_empty());
    assert_eq!(stats.file_stats.new_files, None);
    assert_eq!(stats.file_stats.total_files, None);
}

#[test]
fn test_tool_error_text_before_summary() {
    let output = format!("Fatal: unable to open config file\n{BACKUP_STREAM}");
    let result = extract_backup_info(output.as_bytes(), "/data");
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[test]
fn test_stream_cut_mid_summary() {
    let cut = &BACKUP_STREAM[..BACKUP_STREAM.len() - 40];
    let result = extract_backup_info(cut.as_bytes(), "/data");
    assert!(result.is_err());
}
