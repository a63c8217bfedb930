//! Tests for `pgscaffold set-env`.

use crate::support::*;
use std::fs;

#[test]
fn test_set_env_creates_missing_file() {
    let t = Test::new();
    let file = t.path("foo.env");

    let output = t.set_env(&file, "X", "1");
    assert_success(&output);
    assert_stdout_contains(&output, "created X");

    assert_eq!(fs::read_to_string(&file).unwrap(), "X=\"1\"\n");
}

#[test]
fn test_set_env_updates_in_place() {
    let t = Test::new();
    let file = t.path("app.env");
    fs::write(&file, "Y=old\nZ=2\n").unwrap();

    let output = t.set_env(&file, "Y", "new");
    assert_success(&output);
    assert_stdout_contains(&output, "updated Y");

    assert_eq!(fs::read_to_string(&file).unwrap(), "Y=\"new\"\nZ=2\n");
}

#[test]
fn test_set_env_twice_is_idempotent() {
    let t = Test::new();
    let file = t.path("app.env");
    fs::write(&file, "# app\nA=1").unwrap();

    assert_success(&t.set_env(&file, "B", "two"));
    let first = fs::read_to_string(&file).unwrap();
    assert_eq!(first, "# app\nA=1\nB=\"two\"\n");

    let output = t.set_env(&file, "B", "two");
    assert_success(&output);
    assert_stdout_contains(&output, "already set");
    assert_eq!(fs::read_to_string(&file).unwrap(), first);
}

#[test]
fn test_set_env_relative_path() {
    let t = Test::new();

    assert_success(&t.set_env(std::path::Path::new("rel.env"), "K", "v"));
    assert_eq!(t.read("rel.env"), "K=\"v\"\n");
}

#[test]
fn test_set_env_invalid_key() {
    let t = Test::new();
    let file = t.path("app.env");

    let output = t.set_env(&file, "BAD KEY", "v");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid env key");
    assert!(!file.exists());
}
