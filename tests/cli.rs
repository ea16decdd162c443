//! CLI command integration tests.
//!
//! These tests verify the core functionality that CLI commands would use.
//! Tests use library functions directly rather than subprocess execution.

use std::fs;
use std::path::PathBuf;

use partfile::{Error, MultiPartFile, find_parts, verify_contiguous};
use tempfile::TempDir;

mod common;

/// Writes `data` to an input file and splits it into `out/<name>`.
fn split_sample(data: &[u8], name: &str, limit: u64) -> (TempDir, PathBuf, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("input.bin");
    fs::write(&input, data).expect("Failed to write input");

    let out_dir = temp_dir.path().join("out");
    fs::create_dir(&out_dir).expect("Failed to create output dir");
    let base = out_dir.join(name);
    let parts = MultiPartFile::split_file(&input, &base, limit).expect("Failed to split");
    (temp_dir, base, parts)
}

// =============================================================================
// Split Command Tests
// =============================================================================

#[test]
fn test_split_random_data() {
    let data = common::random_data(64 * 1024 + 17);
    let (_dir, base, parts) = split_sample(&data, "blob.bin", 16 * 1024);

    assert_eq!(parts.len(), 5);
    assert_eq!(parts[0], base);
    assert_eq!(fs::metadata(&parts[4]).unwrap().len(), 17);
    assert_eq!(common::concat_files(&parts), data);
}

#[test]
fn test_split_long_extension_is_kept_in_prefix() {
    let (_dir, base, parts) = split_sample(b"0123456789", "archive.gz", 4);

    let dir = base.parent().unwrap();
    assert_eq!(
        parts,
        vec![
            base.clone(),
            dir.join("archive.gz.part2"),
            dir.join("archive.gz.part3"),
        ]
    );
}

#[test]
fn test_split_overwrites_previous_parts() {
    let (dir, base, first) = split_sample(&[1u8; 30], "data.txt", 10);
    assert_eq!(first.len(), 3);

    let input = dir.path().join("input.bin");
    fs::write(&input, [2u8; 30]).unwrap();
    let second = MultiPartFile::split_file(&input, &base, 10).unwrap();

    assert_eq!(second, first);
    assert_eq!(common::concat_files(&second), vec![2u8; 30]);
}

#[test]
fn test_split_shorter_input_removes_old_parts() {
    let (dir, base, first) = split_sample(&[1u8; 50], "data.txt", 10);
    assert_eq!(first.len(), 5);

    let input = dir.path().join("input.bin");
    fs::write(&input, [2u8; 12]).unwrap();
    let second = MultiPartFile::split_file(&input, &base, 10).unwrap();

    assert_eq!(second, first[..2].to_vec());
    assert_eq!(find_parts(&base).unwrap(), second);
    assert!(verify_contiguous(&second).is_ok());

    let joined = dir.path().join("joined.bin");
    assert_eq!(MultiPartFile::join_files(&base, &joined).unwrap(), 12);
    assert_eq!(fs::read(&joined).unwrap(), vec![2u8; 12]);
}

// =============================================================================
// Join Command Tests
// =============================================================================

#[test]
fn test_join_discovered_parts() {
    let data = common::random_data(5000);
    let (dir, base, _parts) = split_sample(&data, "blob.bin", 1000);

    let joined = dir.path().join("joined.bin");
    let bytes = MultiPartFile::join_files(&base, &joined).unwrap();

    assert_eq!(bytes, 5000);
    assert_eq!(fs::read(&joined).unwrap(), data);
}

#[test]
fn test_join_explicit_files() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("b.txt");
    fs::write(&a, b"first ").unwrap();
    fs::write(&b, b"second").unwrap();

    let joined = temp_dir.path().join("joined.txt");
    let bytes = MultiPartFile::from_files([&b, &a]).join_into(&joined).unwrap();

    assert_eq!(bytes, 12);
    assert_eq!(fs::read_to_string(&joined).unwrap(), "secondfirst ");
}

#[test]
fn test_join_missing_base() {
    let temp_dir = TempDir::new().unwrap();

    let err = MultiPartFile::join_files(
        temp_dir.path().join("absent.bin"),
        temp_dir.path().join("joined.bin"),
    )
    .unwrap_err();

    assert!(err.is_io());
    assert!(!temp_dir.path().join("joined.bin").exists());
}

// =============================================================================
// List Command Tests
// =============================================================================

#[test]
fn test_list_complete_sequence() {
    let (_dir, base, parts) = split_sample(&[7u8; 25], "seq.dat", 10);

    let found = find_parts(&base).unwrap();

    assert_eq!(found, parts);
    assert!(verify_contiguous(&found).is_ok());
}

#[test]
fn test_list_detects_gap() {
    let (_dir, base, parts) = split_sample(&[7u8; 40], "seq.dat", 10);
    fs::remove_file(&parts[2]).unwrap();

    let found = find_parts(&base).unwrap();
    assert_eq!(found.len(), 3);

    match verify_contiguous(&found) {
        Err(Error::PartMissing { number, path }) => {
            assert_eq!(number, 3);
            assert_eq!(path, parts[2]);
        }
        other => panic!("expected PartMissing, got {:?}", other),
    }
}

// =============================================================================
// Delete Command Tests
// =============================================================================

#[test]
fn test_delete_reports_removed_files() {
    let (_dir, base, parts) = split_sample(&[0u8; 35], "gone.bin", 10);

    let deleted = MultiPartFile::delete(&base).unwrap();

    assert_eq!(deleted, parts);
    assert_eq!(find_parts(&base).unwrap(), vec![base.clone()]);
    assert!(!base.exists());
}

#[test]
fn test_delete_leaves_parts_after_gap() {
    let (_dir, base, parts) = split_sample(&[0u8; 40], "gap.bin", 10);
    fs::remove_file(&parts[1]).unwrap();

    let deleted = MultiPartFile::delete(&base).unwrap();

    assert_eq!(deleted, vec![base.clone()]);
    assert!(parts[2].exists());
    assert!(parts[3].exists());
}
