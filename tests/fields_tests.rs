//! Integration tests for the fields command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::lalp_cmd;

#[test]
fn test_fields_lists_present_tags() {
    let temp = TempDir::new().unwrap();

    let output = lalp_cmd()
        .current_dir(temp.path())
        .arg("fields")
        .write_stdin("<F 12> <G N 2/L?> <SN Ann Smith>")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "F  = \"12\"",
            "G1 = \"N 2\"",
            "G2 = \"L?\"",
            "SN = \"Ann Smith\"  [reserved]",
        ]
    );
}

#[test]
fn test_fields_no_tags() {
    let temp = TempDir::new().unwrap();

    lalp_cmd()
        .current_dir(temp.path())
        .arg("fields")
        .write_stdin("nothing tagged")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_fields_all_shows_absent() {
    let temp = TempDir::new().unwrap();

    let output = lalp_cmd()
        .current_dir(temp.path())
        .arg("fields")
        .arg("--all")
        .write_stdin("<F 12>")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 35);
    assert!(stdout.contains("F  = \"12\""));
    assert!(stdout.contains("ML = (absent)"));
    assert!(stdout.contains("WT = (absent)  [reserved]"));
}

#[test]
fn test_fields_single_tag() {
    let temp = TempDir::new().unwrap();

    lalp_cmd()
        .current_dir(temp.path())
        .arg("fields")
        .arg("--tag")
        .arg("co")
        .write_stdin("<CO relief: money>")
        .assert()
        .success()
        .stdout("relief: money\n");
}

#[test]
fn test_fields_unknown_tag() {
    let temp = TempDir::new().unwrap();

    lalp_cmd()
        .current_dir(temp.path())
        .arg("fields")
        .arg("--tag")
        .arg("ZZ")
        .write_stdin("")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown tag: 'ZZ'"));
}
