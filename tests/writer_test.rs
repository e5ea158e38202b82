use std::fs;

use substitute::error::Error;
use substitute::writer::write_output;
use tempfile::TempDir;

#[test]
fn test_write_creates_missing_directories() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("a/b/c/file.txt");

    write_output(&target, b"content").unwrap();
    assert_eq!(fs::read(&target).unwrap(), b"content");
}

#[test]
fn test_write_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("file.txt");
    fs::write(&target, "old content that is longer").unwrap();

    write_output(&target, b"new").unwrap();
    assert_eq!(fs::read(&target).unwrap(), b"new");
}

#[test]
fn test_write_parent_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = write_output(blocker.join("nested/file.txt"), b"data");
    assert!(matches!(result, Err(Error::DirectoryCreateError { .. })));
}

#[test]
fn test_write_target_is_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("dir");
    fs::create_dir(&target).unwrap();

    match write_output(&target, b"data") {
        Err(Error::OutputWriteError { path, .. }) => assert_eq!(path, target),
        other => panic!("Expected OutputWriteError, got {:?}", other),
    }
}
