//! Integration tests for `bsh env show` mode resolution.

mod common;

use common::{TestEnv, parse_json};
use predicates::prelude::*;

fn env_show_with_mode(env: &TestEnv, mode: &str) -> serde_json::Value {
    let output = env
        .bsh()
        .env("BSH_MODE", mode)
        .args(["env", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    parse_json(&output.stdout)
}

#[test]
fn test_bypass_modes() {
    let env = TestEnv::new();

    for mode in ["local-dev", "demo"] {
        let json = env_show_with_mode(&env, mode);
        assert_eq!(json["mode"], mode);
        assert_eq!(json["auth_strategy"], "bypass");
    }
}

#[test]
fn test_identity_provider_modes() {
    let env = TestEnv::new();

    for mode in ["staging", "production"] {
        let json = env_show_with_mode(&env, mode);
        assert_eq!(json["mode"], mode);
        assert_eq!(json["auth_strategy"], "identity-provider");
    }
}

#[test]
fn test_unset_mode_uses_build_default() {
    let env = TestEnv::new();

    // TestEnv::bsh removes BSH_MODE; the build default is local-dev.
    let output = env.bsh().args(["env", "show"]).output().unwrap();
    let json = parse_json(&output.stdout);
    assert_eq!(json["mode"], "local-dev");
    assert_eq!(json["auth_strategy"], "bypass");
}

#[test]
fn test_invalid_mode_falls_back() {
    let env = TestEnv::new();

    let json = env_show_with_mode(&env, "orbit");
    assert_eq!(json["mode"], "local-dev");
}

#[test]
fn test_env_show_reports_build_metadata() {
    let env = TestEnv::new();

    let output = env.bsh().args(["env", "show"]).output().unwrap();
    let json = parse_json(&output.stdout);
    assert!(json["build_timestamp"].is_string());
    assert!(json["git_commit"].is_string());
}

#[test]
fn test_env_show_human_output() {
    let env = TestEnv::new();

    env.bsh()
        .env("BSH_MODE", "production")
        .args(["env", "show", "--human"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: production"))
        .stdout(predicate::str::contains("auth: identity-provider"));
}
