//! End-to-end CLI tests.
//!
//! These tests run the actual binary against transcript files on disk and
//! check its output and exit codes.
#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "01/02/23, 10:00 - Ana: Hola hola perro\n\
                01/02/23, 10:05 - Luis: el perro ladra 😂\n\
                sigue el mensaje\n\
                02/02/23, 09:00 - Ana: <Multimedia omitido>\n";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    fs::write(dir.path().join("empty.txt"), "sin cabeceras\n").unwrap();

    dir
}

fn charla() -> Command {
    Command::cargo_bin("charla").unwrap()
}

#[test]
fn test_basic_analysis() {
    let dir = setup_fixtures();
    charla()
        .arg(dir.path().join("chat.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana sent 2 messages"))
        .stdout(predicate::str::contains("Luis sent 1 messages"))
        .stdout(predicate::str::contains("perro"));
}

#[test]
fn test_missing_file_fails() {
    charla()
        .arg("no_such_file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.txt"));
}

#[test]
fn test_empty_chat_fails() {
    let dir = setup_fixtures();
    charla()
        .arg(dir.path().join("empty.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_top_n_flags() {
    let dir = setup_fixtures();
    charla()
        .arg(dir.path().join("chat.txt"))
        .args(["-w", "1", "-e", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("perro"));
}

#[test]
fn test_ignore_flag_filters_words() {
    let dir = setup_fixtures();
    charla()
        .arg(dir.path().join("chat.txt"))
        .args(["--ignore", "perro,ladra"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\d+  perro").unwrap().not());
}

#[cfg(feature = "json-report")]
#[test]
fn test_json_format() {
    let dir = setup_fixtures();
    let output = charla()
        .arg(dir.path().join("chat.txt"))
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    // The JSON payload starts at the first bracket after the progress lines
    let json = &text[text.find('[').unwrap()..text.rfind(']').unwrap() + 1];
    let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(parsed[0]["name"], "Ana");
    assert_eq!(parsed[0]["messages"], 2);
}

#[test]
fn test_no_arguments_shows_usage() {
    charla()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
