//! End-to-end tests that drive the compiled binary

use std::fs::{self, File};
use std::io::Write;
use std::process::Command;

use tempfile::tempdir;

fn run_csv2json(args: &[&str]) -> (bool, String, String) {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--bin", "csv2json", "--quiet", "--"])
        .args(args)
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped());

    let output = cmd.output().expect("failed to run csv2json");

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    (output.status.success(), stdout, stderr)
}

#[test]
fn test_converts_directory_and_exits_zero() {
    let input_dir = tempdir().unwrap();
    let nested = input_dir.path().join("sub");
    fs::create_dir_all(&nested).unwrap();

    let mut f1 = File::create(input_dir.path().join("a.csv")).unwrap();
    write!(f1, "name,age\nAlice,30\nBob,25\n").unwrap();

    let mut f2 = File::create(nested.join("b.csv")).unwrap();
    write!(f2, "city\nParis\n").unwrap();

    // a non-CSV bystander must be ignored
    fs::write(nested.join("notes.txt"), "not csv").unwrap();

    let (success, stdout, stderr) = run_csv2json(&[
        input_dir.path().to_str().unwrap(),
        "--recursive",
    ]);

    assert!(success, "expected exit 0; stderr: {}", stderr);
    assert!(stdout.contains("Found 2 CSV files"), "stdout: {}", stdout);

    let a_json = fs::read_to_string(input_dir.path().join("a.json")).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&a_json).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["name"], "Alice");

    assert!(nested.join("b.json").exists());
    assert!(!nested.join("notes.json").exists());
}

#[test]
fn test_bad_file_fails_run_but_good_file_still_converts() {
    let input_dir = tempdir().unwrap();

    let mut fb = File::create(input_dir.path().join("bad.csv")).unwrap();
    write!(fb, "a,b\n\"never closed,1\n").unwrap();

    let mut fg = File::create(input_dir.path().join("good.csv")).unwrap();
    write!(fg, "a,b\n1,2\n").unwrap();

    let (success, _stdout, stderr) =
        run_csv2json(&[input_dir.path().to_str().unwrap(), "--recursive"]);

    assert!(!success, "a failed file must make the exit code nonzero");
    assert!(stderr.contains("bad.csv"), "stderr: {}", stderr);
    assert!(input_dir.path().join("good.json").exists());
    assert!(!input_dir.path().join("bad.json").exists());
}

#[test]
fn test_missing_directory_exits_nonzero() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("absent");

    let (success, _stdout, stderr) = run_csv2json(&[missing.to_str().unwrap()]);

    assert!(!success);
    assert!(stderr.contains("directory not found"), "stderr: {}", stderr);
}

#[test]
fn test_check_mode_reports_without_writing() {
    let input_dir = tempdir().unwrap();
    let mut f = File::create(input_dir.path().join("a.csv")).unwrap();
    write!(f, "x\n1\n").unwrap();

    let (success, stdout, _stderr) =
        run_csv2json(&[input_dir.path().to_str().unwrap(), "--check"]);

    assert!(success);
    assert!(stdout.contains("well-formed"), "stdout: {}", stdout);
    assert!(!input_dir.path().join("a.json").exists());
}
