//! Integration tests for the batch command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::lalp_cmd;

/// Helper to create a source file, creating parent directories
fn create_source(temp: &TempDir, relative: &str, content: &str) {
    let path = temp.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_batch_converts_tree() {
    let temp = TempDir::new().unwrap();
    create_source(&temp, "letters/a.txt", "<F a>");
    create_source(&temp, "letters/box1/b.txt", "<F b>");
    create_source(&temp, "letters/notes.md", "<F skipped>");

    lalp_cmd()
        .current_dir(temp.path())
        .arg("batch")
        .arg("letters")
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 2 files"));

    let a = fs::read_to_string(temp.path().join("letters/a.xml")).unwrap();
    assert!(a.contains("<idno>a</idno>"));
    let b = fs::read_to_string(temp.path().join("letters/box1/b.xml")).unwrap();
    assert!(b.contains("<idno>b</idno>"));
    assert!(!temp.path().join("letters/notes.xml").exists());
}

#[test]
fn test_batch_out_dir() {
    let temp = TempDir::new().unwrap();
    create_source(&temp, "letters/box1/b.txt", "<F b>");

    lalp_cmd()
        .current_dir(temp.path())
        .arg("batch")
        .arg("letters")
        .arg("--out-dir")
        .arg("tei")
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 1 file"));

    assert!(temp.path().join("tei/box1/b.xml").exists());
    assert!(!temp.path().join("letters/box1/b.xml").exists());
}

#[test]
fn test_batch_skips_hidden_directories() {
    let temp = TempDir::new().unwrap();
    create_source(&temp, "letters/a.txt", "<F a>");
    create_source(&temp, "letters/.drafts/c.txt", "<F c>");

    lalp_cmd()
        .current_dir(temp.path())
        .arg("batch")
        .arg("letters")
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 1 file"));

    assert!(!temp.path().join("letters/.drafts/c.xml").exists());
}

#[test]
fn test_batch_respects_config_extensions() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("lalp-tei.toml"),
        "[batch]\nsource_extension = \"letter\"\noutput_extension = \"tei.xml\"\n",
    )
    .unwrap();
    create_source(&temp, "letters/a.letter", "<F a>");

    lalp_cmd()
        .current_dir(temp.path())
        .arg("batch")
        .arg("letters")
        .assert()
        .success();

    assert!(temp.path().join("letters/a.tei.xml").exists());
}

#[test]
fn test_batch_no_source_files() {
    let temp = TempDir::new().unwrap();
    create_source(&temp, "letters/readme.md", "");

    lalp_cmd()
        .current_dir(temp.path())
        .arg("batch")
        .arg("letters")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No source files found"));
}

#[test]
fn test_batch_missing_directory() {
    let temp = TempDir::new().unwrap();

    lalp_cmd()
        .current_dir(temp.path())
        .arg("batch")
        .arg("nowhere")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input not found"));
}
