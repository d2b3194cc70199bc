/*!
 * Process-level tests for the CLI binary: the stdout contract line, exit
 * statuses for each failure class, and batch mode output.
 */

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn nbcount_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nbcount"))
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write test file");
    path
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

/// The default invocation reads CP-Math-Demosaic.ipynb from the working
/// directory and prints exactly the contract line
#[test]
fn test_run_withNoArgs_shouldReadDefaultNotebook() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_file(
        &temp_dir,
        "CP-Math-Demosaic.ipynb",
        r#"{"cells": [{}, {}, {}]}"#,
    );

    let output = nbcount_bin()
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run nbcount");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Starting with 3 cell(s)\n");
}

#[test]
fn test_run_withEmptyCells_shouldPrintZero() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = write_file(&temp_dir, "empty.ipynb", r#"{"cells": []}"#);

    let output = nbcount_bin()
        .arg("--input")
        .arg(&path)
        .output()
        .expect("failed to run nbcount");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Starting with 0 cell(s)\n");
}

#[test]
fn test_run_withMissingFile_shouldExitNonzeroWithoutContractLine() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    let output = nbcount_bin()
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run nbcount");

    assert!(!output.status.success());
    assert!(!stdout_of(&output).contains("Starting with"));
}

#[test]
fn test_run_withInvalidJson_shouldExitNonzero() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = write_file(&temp_dir, "broken.ipynb", "this is not json");

    let output = nbcount_bin()
        .arg("--input")
        .arg(&path)
        .output()
        .expect("failed to run nbcount");

    assert!(!output.status.success());
}

#[test]
fn test_run_withoutCellsField_shouldExitNonzeroAndNameTheField() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = write_file(&temp_dir, "no_cells.ipynb", r#"{}"#);

    let output = nbcount_bin()
        .arg("--input")
        .arg(&path)
        .output()
        .expect("failed to run nbcount");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("stderr should be UTF-8");
    assert!(stderr.contains("cells"), "stderr was: {stderr}");
}

/// Repeated runs against an unmodified input produce identical output
#[test]
fn test_run_calledTwice_shouldBeIdempotent() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = write_file(&temp_dir, "stable.ipynb", r#"{"cells": [{}, {}]}"#);

    let first = nbcount_bin()
        .arg("--input")
        .arg(&path)
        .output()
        .expect("failed to run nbcount");
    let second = nbcount_bin()
        .arg("--input")
        .arg(&path)
        .output()
        .expect("failed to run nbcount");

    assert!(first.status.success());
    assert_eq!(stdout_of(&first), stdout_of(&second));
}

#[test]
fn test_run_withSummary_shouldPrintBreakdown() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = write_file(
        &temp_dir,
        "mixed.ipynb",
        r#"{"cells": [
            {"cell_type": "code"},
            {"cell_type": "markdown"},
            {"cell_type": "markdown"}
        ]}"#,
    );

    let output = nbcount_bin()
        .arg("--input")
        .arg(&path)
        .arg("--summary")
        .output()
        .expect("failed to run nbcount");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Starting with 3 cell(s)",
            "  code: 1",
            "  markdown: 2",
            "  raw: 0",
            "  other: 0"
        ]
    );
}

#[test]
fn test_run_withInputDir_shouldPrintOneLinePerNotebook() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_file(&temp_dir, "one.ipynb", r#"{"cells": [{}]}"#);
    write_file(&temp_dir, "two.ipynb", r#"{"cells": [{}, {}]}"#);
    write_file(&temp_dir, "notes.txt", "not a notebook");

    let output = nbcount_bin()
        .arg("--input-dir")
        .arg(temp_dir.path())
        .output()
        .expect("failed to run nbcount");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let mut lines: Vec<_> = stdout.lines().collect();
    lines.sort();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("one.ipynb: 1 cell(s)"));
    assert!(lines[1].ends_with("two.ipynb: 2 cell(s)"));
}

#[test]
fn test_run_withInputDirAndBatch_shouldContinuePastBrokenNotebooks() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    write_file(&temp_dir, "good.ipynb", r#"{"cells": [{}]}"#);
    write_file(&temp_dir, "broken.ipynb", "not json at all");

    let output = nbcount_bin()
        .arg("--input-dir")
        .arg(temp_dir.path())
        .arg("--batch")
        .output()
        .expect("failed to run nbcount");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("good.ipynb: 1 cell(s)"));
}

#[test]
fn test_run_withBatchButNoInputDir_shouldExitNonzero() {
    let output = nbcount_bin()
        .arg("--batch")
        .output()
        .expect("failed to run nbcount");

    assert!(!output.status.success());
}

#[test]
fn test_run_withInputDirNotADirectory_shouldExitNonzero() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let file = write_file(&temp_dir, "plain.ipynb", r#"{"cells": []}"#);

    let output = nbcount_bin()
        .arg("--input-dir")
        .arg(&file)
        .output()
        .expect("failed to run nbcount");

    assert!(!output.status.success());
}
