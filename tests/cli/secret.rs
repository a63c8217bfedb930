//! Tests for `pgscaffold secret`.

use crate::support::*;

#[test]
fn test_secret_prints_one_by_default() {
    let t = Test::new();
    let output = t.cmd().arg("secret").output().unwrap();
    assert_success(&output);

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(is_secret(lines[0]), "bad secret: {}", lines[0]);
}

#[test]
fn test_secret_count() {
    let t = Test::new();
    let output = t.secret(5);
    assert_success(&output);

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| is_secret(l)));

    let mut unique = lines.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5);
}

#[test]
fn test_secret_writes_nothing() {
    let t = Test::new();
    assert_success(&t.secret(1));
    assert!(t.entries().is_empty());
}
