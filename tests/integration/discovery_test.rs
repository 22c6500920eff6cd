//! Integration tests for CSV file discovery

use assert_matches::assert_matches;
use std::fs;
use tempfile::tempdir;

use csv2json::discovery::find_csv_files;
use csv2json::ConversionError;

#[test]
fn test_flat_scan_returns_top_level_only() {
    let tmp = tempdir().unwrap();
    let sub = tmp.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(tmp.path().join("a.csv"), "x\n1\n").unwrap();
    fs::write(sub.join("b.csv"), "x\n2\n").unwrap();

    let found = find_csv_files(tmp.path(), false).unwrap();
    assert_eq!(found, vec![tmp.path().join("a.csv")]);
}

#[test]
fn test_recursive_scan_returns_whole_tree() {
    let tmp = tempdir().unwrap();
    let deep = tmp.path().join("sub").join("deeper");
    fs::create_dir_all(&deep).unwrap();
    fs::write(tmp.path().join("a.csv"), "x\n1\n").unwrap();
    fs::write(deep.join("b.csv"), "x\n2\n").unwrap();

    let found = find_csv_files(tmp.path(), true).unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.contains(&tmp.path().join("a.csv")));
    assert!(found.contains(&deep.join("b.csv")));
}

#[test]
fn test_missing_directory_fails_and_writes_nothing() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("absent");

    let result = find_csv_files(&missing, true);
    assert_matches!(result, Err(ConversionError::NotFound { .. }));

    // the failed scan must not create anything
    assert!(fs::read_dir(tmp.path()).unwrap().next().is_none());
}

#[test]
fn test_non_csv_files_ignored() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a.csv"), "x\n").unwrap();
    fs::write(tmp.path().join("b.json"), "[]").unwrap();
    fs::write(tmp.path().join("c.tsv"), "x\n").unwrap();

    let found = find_csv_files(tmp.path(), true).unwrap();
    assert_eq!(found, vec![tmp.path().join("a.csv")]);
}
