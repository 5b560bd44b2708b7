//! Integration tests for `bsh flags resolve`.

mod common;

use common::{TestEnv, parse_json};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn write_snapshot(env: &TestEnv, raw: &str) -> PathBuf {
    let path = env.data_path().join("flags.json");
    fs::write(&path, raw).unwrap();
    path
}

#[test]
fn test_resolve_verbatim_hit() {
    let env = TestEnv::new();
    let snapshot = write_snapshot(&env, r#"{"enable_guess_edit": true}"#);

    let output = env
        .bsh()
        .args(["flags", "resolve", "enable_guess_edit", "--snapshot"])
        .arg(&snapshot)
        .output()
        .unwrap();

    let json = parse_json(&output.stdout);
    assert_eq!(json["value"], true);
    assert_eq!(json["source"], "verbatim");
}

#[test]
fn test_resolve_camel_case_fallback() {
    let env = TestEnv::new();
    let snapshot = write_snapshot(&env, r#"{"myFlagName": true}"#);

    let output = env
        .bsh()
        .args(["flags", "resolve", "my_flag_name", "--snapshot"])
        .arg(&snapshot)
        .output()
        .unwrap();

    let json = parse_json(&output.stdout);
    assert_eq!(json["value"], true);
    assert_eq!(json["source"], "camel-case-fallback");
}

#[test]
fn test_resolve_absent_key_uses_default() {
    let env = TestEnv::new();
    let snapshot = write_snapshot(&env, r#"{}"#);

    let output = env
        .bsh()
        .args([
            "flags",
            "resolve",
            "missing_flag",
            "--default",
            "true",
            "--snapshot",
        ])
        .arg(&snapshot)
        .output()
        .unwrap();

    let json = parse_json(&output.stdout);
    assert_eq!(json["value"], true);
    assert_eq!(json["source"], "default");
}

#[test]
fn test_resolve_wrong_type_falls_through_to_default() {
    let env = TestEnv::new();
    let snapshot = write_snapshot(&env, r#"{"my_flag": "enabled"}"#);

    let output = env
        .bsh()
        .args(["flags", "resolve", "my_flag", "--snapshot"])
        .arg(&snapshot)
        .output()
        .unwrap();

    let json = parse_json(&output.stdout);
    assert_eq!(json["value"], false);
    assert_eq!(json["source"], "default");
}

#[test]
fn test_resolve_missing_snapshot_file_fails() {
    let env = TestEnv::new();

    env.bsh()
        .args(["flags", "resolve", "k", "--snapshot", "/nonexistent/flags.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_resolve_human_output() {
    let env = TestEnv::new();
    let snapshot = write_snapshot(&env, r#"{"liveScores": true}"#);

    env.bsh()
        .args(["flags", "resolve", "live_scores", "--human", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "live_scores = true (from camel-case-fallback)",
        ));
}
