//! End-to-end CLI tests against the fixtures in `tests/fixtures/`.
//!
//! Each fixture directory holds a `spfsandbox.toml`; `basic` also carries an
//! `expected.eval.json` with `__TIMESTAMP__` and `__VERSION__` placeholders.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use spfsandbox_test_util::normalize_nondeterministic;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn spfsandbox_cmd() -> Command {
    Command::cargo_bin("spfsandbox").expect("spfsandbox binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("spfsandbox-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn fixture_config(name: &str) -> PathBuf {
    fixtures_dir().join(name).join("spfsandbox.toml")
}

const BASIC_ADDRESSES: [&str; 4] = ["10.20.30.40", "172.16.5.5", "2001:db8::25", "8.8.8.8"];

#[test]
fn basic_fixture_report_matches_expected() {
    let temp = TempDir::new().expect("temp dir");
    let report_path = temp.path().join("report.json");

    spfsandbox_cmd()
        .arg("--config")
        .arg(fixture_config("basic"))
        .arg("eval")
        .args(BASIC_ADDRESSES)
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    let actual: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    let expected: Value = serde_json::from_str(
        &std::fs::read_to_string(fixtures_dir().join("basic").join("expected.eval.json"))
            .expect("read expected"),
    )
    .expect("parse expected");

    assert_eq!(normalize_nondeterministic(actual), expected);
}

#[test]
fn basic_fixture_prints_one_line_per_address() {
    spfsandbox_cmd()
        .arg("--config")
        .arg(fixture_config("basic"))
        .arg("eval")
        .args(BASIC_ADDRESSES)
        .assert()
        .success()
        .stdout(
            "10.20.30.40\tunknown\n\
             172.16.5.5\tunknown\n\
             2001:db8::25\tunknown\n\
             8.8.8.8\tallow\n",
        );
}

#[test]
fn missing_config_evaluates_everything_to_unknown() {
    let temp = TempDir::new().expect("temp dir");

    spfsandbox_cmd()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("eval")
        .arg("192.0.2.1")
        .assert()
        .success()
        .stdout("192.0.2.1\tunknown\n");
}

#[test]
fn invalid_outcome_fails_with_context() {
    spfsandbox_cmd()
        .arg("--config")
        .arg(fixture_config("invalid_outcome"))
        .arg("eval")
        .arg("10.0.0.1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("spfsandbox error"))
        .stderr(predicate::str::contains("hardfail"));
}

#[test]
fn ipv6_only_fixture_applies_elision_rules() {
    spfsandbox_cmd()
        .arg("--config")
        .arg(fixture_config("ipv6_only"))
        .arg("eval")
        .args(["::1", "fe80::abc", "2001:db8::2"])
        .assert()
        .success()
        .stdout("::1\tunknown\nfe80::abc\tunknown\n2001:db8::2\tsoftfail\n");
}

#[test]
fn eval_writes_markdown_when_requested() {
    let temp = TempDir::new().expect("temp dir");
    let md_path = temp.path().join("out").join("eval.md");

    spfsandbox_cmd()
        .arg("--config")
        .arg(fixture_config("basic"))
        .arg("eval")
        .arg("8.8.8.8")
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .success();

    let md = std::fs::read_to_string(&md_path).expect("read markdown");
    assert!(md.starts_with("# SPF sandbox evaluation"));
    assert!(md.contains("8.8.8.8"));
}

#[test]
fn md_renders_saved_report() {
    let temp = TempDir::new().expect("temp dir");
    let report_path = temp.path().join("report.json");

    spfsandbox_cmd()
        .arg("--config")
        .arg(fixture_config("basic"))
        .arg("eval")
        .args(BASIC_ADDRESSES)
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    spfsandbox_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# SPF sandbox evaluation"))
        .stdout(predicate::str::contains("172.16.0.0/12"))
        .stdout(predicate::str::contains("ALLOW"));
}

#[test]
fn md_rejects_missing_report() {
    let temp = TempDir::new().expect("temp dir");

    spfsandbox_cmd()
        .arg("md")
        .arg("--report")
        .arg(temp.path().join("nope.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read report"));
}

#[test]
fn rules_lists_compiled_patterns() {
    spfsandbox_cmd()
        .arg("--config")
        .arg(fixture_config("basic"))
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("192.168.0.0/16"))
        .stdout(predicate::str::contains(r"10\.[0-9]+\.[0-9]+\.[0-9]+.*"));
}

#[test]
fn rules_without_config_reports_empty_engine() {
    let temp = TempDir::new().expect("temp dir");

    spfsandbox_cmd()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("rules")
        .assert()
        .success()
        .stdout("No rules loaded.\n");
}

#[test]
fn explain_known_outcome() {
    spfsandbox_cmd()
        .args(["explain", "soft-fail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Soft fail (softfail)"));
}

#[test]
fn explain_unknown_outcome_lists_available() {
    spfsandbox_cmd()
        .args(["explain", "hardfail"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown outcome: hardfail"))
        .stderr(predicate::str::contains("  - softfail"));
}

#[test]
fn unreadable_config_is_an_error_not_an_empty_rule_set() {
    let temp = TempDir::new().expect("temp dir");
    let not_a_dir = temp.path().join("plain-file");
    std::fs::write(&not_a_dir, "").expect("write file");

    // The parent is a regular file, so the read fails without the path being missing.
    spfsandbox_cmd()
        .arg("--config")
        .arg(not_a_dir.join("spfsandbox.toml"))
        .arg("eval")
        .arg("192.0.2.1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config"))
        .stdout("");
}
