mod common;

use common::TestContext;
use predicates::prelude::*;

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_default_palette() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().success();

    let config = ctx.read_config();
    assert!(config.contains("content = [\"./index.html\", \"./src/**/*.rs\"]"));
    assert!(config.contains("white = \"#fff\""));
    assert!(config.contains("primary = \"#7c3aed\""));
    assert!(config.contains("fore = \"#1F1C1F\""));
    assert!(config.contains("error = \"#d60015\""));
    assert!(config.contains("plugins = []"));
}

#[test]
fn init_rejects_when_config_exists() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().success();

    ctx.cli()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites_existing_config() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().success();
    let scaffold = ctx.read_config();

    ctx.write_config("content = [\"./custom.html\"]\n");
    ctx.cli().args(["init", "--force"]).assert().success();

    assert_eq!(ctx.read_config(), scaffold);
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_requires_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No weft.toml"));
}

#[test]
fn check_reports_malformed_hex_as_error() {
    let ctx = TestContext::new();
    ctx.write_config("[theme.colors]\nprimary = \"purple\"\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid hex color"));
}

#[test]
fn check_rejects_unknown_keys() {
    let ctx = TestContext::new();
    ctx.write_config("darkMode = \"class\"\n");

    ctx.cli()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn check_warns_on_empty_content() {
    let ctx = TestContext::new();
    ctx.write_config("content = []\n");

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN]"))
        .stderr(predicate::str::contains("content is empty"));
}

#[test]
fn check_strict_fails_on_warnings() {
    let ctx = TestContext::new();
    ctx.write_config("content = []\n");

    ctx.cli().args(["check", "--strict"]).assert().code(2);
}

#[test]
fn check_warns_on_duplicate_color_values() {
    let ctx = TestContext::new();
    ctx.write_config("[theme.colors]\nwhite = \"#fff\"\nsnow = \"#FFFFFF\"\n");

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("share the same value"));
}

#[test]
fn check_warns_on_escaping_content_pattern() {
    let ctx = TestContext::new();
    ctx.write_config("content = [\"../shared/*.html\"]\n");

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("escapes the project root"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_requires_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No weft.toml"));
}

#[test]
fn show_prints_resolved_toml() {
    let ctx = TestContext::new();
    // An empty config resolves to the defaults
    ctx.write_config("");

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[theme.colors]"))
        .stdout(predicate::str::contains("\"./src/**/*.rs\""));
}

#[test]
fn show_json_is_machine_readable() {
    let ctx = TestContext::new();
    ctx.cli().arg("init").assert().success();

    let assert = ctx.cli().args(["show", "--format", "json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(value["content"][0], "./index.html");
    assert_eq!(value["theme"]["colors"]["primary"], "#7c3aed");
    assert_eq!(value["plugins"].as_array().map(Vec::len), Some(0));
}

#[test]
fn show_rejects_unknown_format() {
    let ctx = TestContext::new();
    ctx.cli().arg("init").assert().success();

    ctx.cli().args(["show", "--format", "yaml"]).assert().failure();
}

// ---------------------------------------------------------------------------
// sync
// ---------------------------------------------------------------------------

#[test]
fn sync_requires_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No weft.toml"));
}

#[test]
fn sync_dry_run_prints_without_writing() {
    let ctx = TestContext::new();
    ctx.cli().arg("init").assert().success();

    ctx.cli()
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("module.exports"));

    assert!(!ctx.output_path().exists());
    assert!(!ctx.manifest_path().exists());
}

#[test]
fn sync_refuses_locally_modified_output() {
    let ctx = TestContext::new();
    ctx.cli().arg("init").assert().success();
    ctx.cli().arg("sync").assert().success();

    let mut output = ctx.read_output();
    output.push_str("// local tweak\n");
    ctx.write_output(&output);

    ctx.cli()
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("modified locally"));

    // Local edit survives the refused sync
    assert!(ctx.read_output().contains("// local tweak"));
}

#[test]
fn sync_refuses_preexisting_unmanaged_output() {
    let ctx = TestContext::new();
    ctx.cli().arg("init").assert().success();
    ctx.write_output("module.exports = {}\n");

    ctx.cli()
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("modified locally"));
}

#[test]
fn sync_force_overwrites_local_edits() {
    let ctx = TestContext::new();
    ctx.cli().arg("init").assert().success();
    ctx.write_output("module.exports = {}\n");

    ctx.cli().args(["sync", "--force"]).assert().success();

    assert!(ctx.read_output().contains("\"primary\": \"#7c3aed\","));
}

#[test]
fn sync_reports_parse_errors_from_config() {
    let ctx = TestContext::new();
    ctx.write_config("[theme.colors]\nprimary = \"#zzz\"\n");

    ctx.cli()
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hex color"));
}
