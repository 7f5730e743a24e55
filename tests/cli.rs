//! Runs the `jsonpointer` binary as a subprocess.
#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str], stdin: &str) -> (i32, String, String) {
    let bin = env!("CARGO_BIN_EXE_jsonpointer");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"));

    {
        let mut pipe = child.stdin.take().unwrap();
        pipe.write_all(stdin.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ============================================================================
// Lookups
// ============================================================================

#[test]
fn prints_value_from_stdin() {
    let (code, stdout, stderr) = run(&["/foo/2"], r#"{"foo": [1, 3, true]}"#);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout, "true\n");
}

#[test]
fn root_pointer_prints_whole_document() {
    let (code, stdout, _) = run(&[""], r#"{ "a" : [ 1 ] }"#);
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\"a\":[1]}\n");
}

#[test]
fn escaped_tokens() {
    let (code, stdout, _) = run(&["/a~1b/m~0n"], r#"{"a/b": {"m~n": 8}}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout, "8\n");
}

#[test]
fn reads_input_file() {
    let path = fixture("document.json");
    let path = path.to_str().unwrap();
    let (code, stdout, stderr) = run(&["--input", path, "/foo/1"], "");
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout, "\"baz\"\n");
}

#[test]
fn pretty_output() {
    let path = fixture("document.json");
    let path = path.to_str().unwrap();
    let (code, stdout, _) = run(&["--pretty", "--input", path, "/nested"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\n  \"list\": [\n    1,\n    2\n  ]\n}\n");

    let (_, compact, _) = run(&["--input", path, "/nested"], "");
    assert_eq!(compact, "{\"list\":[1,2]}\n");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_key_exits_with_diagnostic() {
    let (code, stdout, stderr) = run(&["/bar"], r#"{"foo": 1}"#);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("\"/bar\""), "stderr: {stderr}");
    assert_eq!(
        stderr
            .matches("pointer starting at offset 0 not found")
            .count(),
        1,
        "stderr: {stderr}"
    );
}

#[test]
fn malformed_pointer_exits_with_diagnostic() {
    let (code, _, stderr) = run(&["foo"], "{}");
    assert_eq!(code, 1);
    assert!(stderr.contains("malformed"), "stderr: {stderr}");
}

#[test]
fn out_of_bounds_index_fails() {
    let (code, stdout, _) = run(&["/foo/-"], r#"{"foo": [1]}"#);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
}

#[test]
fn invalid_json_fails() {
    let (code, _, stderr) = run(&["/foo"], "{not json");
    assert_eq!(code, 1);
    assert!(stderr.contains("input is not valid JSON"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_fails() {
    let (code, _, stderr) = run(&["--input", "does/not/exist.json", "/foo"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
}
