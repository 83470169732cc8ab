//! Run the binary in plain mode against layout files

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn detective(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_detective"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn layout_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

const ATTIC: &str = r#"{
    "root": "Porch",
    "rooms": [
        { "name": "Porch", "left": "Attic", "right": "Cellar", "clue": "Torn glove", "suspect": "Cook" },
        { "name": "Attic", "clue": "Candle wax", "suspect": "Maid" },
        { "name": "Cellar", "clue": "" }
    ]
}"#;

#[test]
fn test_plain_session_with_layout_file() {
    let file = layout_file(ATTIC);
    let path = file.path().to_str().unwrap();
    let output = detective(&["--plain", "--layout", path, "--guess", "Maid"], "e\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("You start at: Porch"));
    assert!(stdout.contains("(e) left  -> Attic"));
    assert!(stdout.contains("  - Candle wax\n  - Torn glove\n"));
    assert!(stdout.contains("Correct! Maid is among the most cited suspects (Cook, Maid)")
        || stdout.contains("Correct! Maid is among the most cited suspects (Maid, Cook)"));
}

#[test]
fn test_json_report() {
    let file = layout_file(ATTIC);
    let path = file.path().to_str().unwrap();
    let output = detective(&["--plain", "--json", "--layout", path, "--guess", "Butler"], "d\n");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["end_reason"], "reached_leaf");
    assert_eq!(value["report"]["path"], serde_json::json!(["Porch", "Cellar"]));
    assert_eq!(value["report"]["clues"], serde_json::json!(["Torn glove"]));
    assert_eq!(value["verdict"]["outcome"], "no_match");
    assert_eq!(value["verdict"]["guess"], "Butler");
}

#[test]
fn test_invalid_layout_fails() {
    let file = layout_file(r#"{ "root": "Porch", "rooms": [ { "name": "Porch", "left": "Nowhere" } ] }"#);
    let path = file.path().to_str().unwrap();
    let output = detective(&["--plain", "--layout", path], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid layout"));
}

#[test]
fn test_malformed_json_fails() {
    let file = layout_file("{ not json");
    let path = file.path().to_str().unwrap();
    let output = detective(&["--plain", "--layout", path], "");

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("invalid layout JSON"));
}

#[test]
fn test_builtin_mansion_quit() {
    let output = detective(&["--plain", "--verbose"], "s\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No evidence was collected against anyone."));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("You are in: Hall de Entrada"));
    assert!(stderr.contains("released 9 rooms, 0 clues, 0 suspects"));
}
