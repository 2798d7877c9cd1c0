use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde_json::Value;

fn gridsplit_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gridsplit"))
}

#[test]
fn parse_subcommand_prints_json() {
    let output = Command::new(gridsplit_bin())
        .args(["--compact", "parse", "a a b\nc c b\nd d e"])
        .output()
        .expect("run gridsplit");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(json["areas"]["b"], serde_json::json!([1, 3, 3, 4]));
}

#[test]
fn invalid_template_exits_with_two() {
    let output = Command::new(gridsplit_bin())
        .args(["parse", "a b a\nc c c"])
        .output()
        .expect("run gridsplit");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("area \"a\""), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn template_from_stdin() {
    let mut child = Command::new(gridsplit_bin())
        .args(["--compact", "layout", "-", "--splitter-size", "8px"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn gridsplit");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"\"a b\"\n\"c d\"\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(json["gridTemplateColumns"], "1fr 8px 1fr");
    assert_eq!(json["gutters"]["allNames"].as_array().map(Vec::len), Some(4));
}

#[test]
fn layout_accepts_template_flag() {
    let output = Command::new(gridsplit_bin())
        .args(["--compact", "layout", "--template", "a b", "--splitter-size", "2px"])
        .output()
        .expect("run gridsplit");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(json["gridTemplateColumns"], "1fr 2px 1fr");
    assert_eq!(json["splitAreas"]["b"], serde_json::json!([1, 3, 2, 4]));
}

#[test]
fn config_missing_template_exits_with_two() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cfg.json");
    std::fs::write(&path, r#"{"splitter_size":"1px","templat":"a b\nc d"}"#).expect("write config");

    let output = Command::new(gridsplit_bin())
        .args(["--compact", "layout", "--config"])
        .arg(&path)
        .output()
        .expect("run gridsplit");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("templat"), "stderr: {stderr}");
}

#[test]
fn presets_subcommand_lists_ten() {
    let output = Command::new(gridsplit_bin())
        .arg("presets")
        .output()
        .expect("run gridsplit");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(json.as_array().map(Vec::len), Some(10));
}
