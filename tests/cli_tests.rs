//! Integration tests for the noted CLI
//!
//! These tests run the noted binary against snapshot files.

use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for noted with an isolated config directory
fn noted(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("noted");
    cmd.env("NOTED_CONFIG_DIR", dir.path().join("config"))
        .env_remove("NOTED_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("NOTED_LOG");
    cmd
}

const NOTES: &str = r#"[
    {"id": 1, "title": "Test 1", "body": "body", "tags": ["alpha"], "parent_note_id": 4,
     "updated_at": "3", "user_id": 1},
    {"id": 2, "title": "Test 2", "body": "body", "tags": [], "parent_note_id": 3,
     "updated_at": "2", "user_id": 1},
    {"id": 3, "title": "Test 3", "body": "body", "tags": ["beta"], "parent_note_id": 0,
     "updated_at": "1", "user_id": 1},
    {"id": 4, "title": "Test 4", "body": "body", "tags": [], "parent_note_id": 3,
     "updated_at": "2", "user_id": 1, "archived": true}
]"#;

fn snapshot(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("notes.json");
    fs::write(&path, json).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and exit codes
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    noted(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: noted"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("autolink"));
}

#[test]
fn test_no_command_prints_version() {
    let dir = tempdir().unwrap();
    noted(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("noted"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    noted(&dir)
        .args(["--format", "yaml", "list"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn test_missing_snapshot_exit_code_3() {
    let dir = tempdir().unwrap();
    noted(&dir)
        .args(["list", "does-not-exist.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("snapshot not found"));
}

#[test]
fn test_malformed_snapshot_json_error_envelope() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, "{not json");
    let output = noted(&dir)
        .args(["--format", "json", "list"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "json_error");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_clap_error_with_json_format() {
    let dir = tempdir().unwrap();
    let output = noted(&dir)
        .args(["--format", "json", "search"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_index_json() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    let output = noted(&dir)
        .args(["--format", "json", "index"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let index = stdout_json(&output);
    assert_eq!(index["3"]["title"], "Test 3 Test 2 Test 4 Test 1");
    assert_eq!(index["3"]["tags"], serde_json::json!(["beta", "alpha"]));
    assert_eq!(index["3"]["parent_note_id"], 0);
}

#[test]
fn test_index_scope() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    noted(&dir)
        .args(["index", "--scope", "3"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 Test 2"))
        .stdout(predicate::str::contains("4 Test 4 Test 1"))
        .stdout(predicate::str::contains("3 Test 3").not());
}

#[test]
fn test_links_json() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    let output = noted(&dir)
        .args(["--format", "json", "links"])
        .arg(&path)
        .output()
        .unwrap();

    let links = stdout_json(&output);
    assert_eq!(links["Test"]["kind"], "disambiguation");
    assert_eq!(links["Test"]["ids"], serde_json::json!([1, 2, 3, 4]));
    assert_eq!(links["Test 2"]["kind"], "note");
    assert_eq!(links["Test 2"]["id"], 2);
}

#[test]
fn test_list_default_view() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    let output = noted(&dir)
        .args(["--format", "json", "list"])
        .arg(&path)
        .output()
        .unwrap();

    let ids: Vec<i64> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|note| note["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_list_archive_view() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    noted(&dir)
        .args(["list", "--view", "archive"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 Test 3"))
        .stdout(predicate::str::contains("4 Test 4 (archived)"))
        .stdout(predicate::str::contains("Test 1").not());
}

#[test]
fn test_list_empty_snapshot() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, "[]");
    noted(&dir)
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));

    noted(&dir)
        .args(["--quiet", "list"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_search_json() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    let output = noted(&dir)
        .args(["--format", "json", "search"])
        .arg(&path)
        .arg("alpha")
        .output()
        .unwrap();

    let hits = stdout_json(&output);
    let ids: Vec<i64> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(hits[0]["title"], "Test 1");
}

#[test]
fn test_search_scope_and_limit() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    noted(&dir)
        .args(["search", "--scope", "0"])
        .arg(&path)
        .arg("alpha")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 Test 3"))
        .stdout(predicate::str::contains("1 Test 1").not());

    noted(&dir)
        .args(["search", "--limit", "1"])
        .arg(&path)
        .arg("alpha")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Test 1 (0.80)"))
        .stdout(predicate::str::contains("Test 3").not());
}

#[test]
fn test_search_no_results() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    noted(&dir)
        .arg("search")
        .arg(&path)
        .arg("zebra")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_search_uses_config_file() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[search]\ntags_weight = 0.1\n").unwrap();

    noted(&dir)
        .arg("--config")
        .arg(&config)
        .arg("search")
        .arg(&path)
        .arg("alpha")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_missing_config_is_usage_error() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    noted(&dir)
        .args(["--config", "nowhere.toml", "list"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_autolink_text() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    noted(&dir)
        .arg("autolink")
        .arg(&path)
        .args(["--text", "see test 2 first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("see [Test 2](/note/2) first"));
}

#[test]
fn test_autolink_note_body() {
    let dir = tempdir().unwrap();
    let path = snapshot(
        &dir,
        r#"[
            {"id": 1, "title": "Garden", "body": "Water the tomatoes"},
            {"id": 2, "title": "Tomatoes", "body": "Check the garden"}
        ]"#,
    );
    let output = noted(&dir)
        .args(["--format", "json", "autolink", "--note", "2"])
        .arg(&path)
        .output()
        .unwrap();

    let linked = stdout_json(&output);
    assert_eq!(linked["markdown"], "Check the [Garden](/note/1)");
    assert_eq!(linked["segments"][1]["type"], "link");
}

#[test]
fn test_autolink_unknown_note() {
    let dir = tempdir().unwrap();
    let path = snapshot(&dir, NOTES);
    noted(&dir)
        .args(["autolink", "--note", "42"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: 42"));
}
