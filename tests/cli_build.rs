mod common;

use common::TestContext;
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn build_default_format_joins_non_empty_parameters() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["build", "A robot holding a red skateboard", "--post-processing-effects", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("A robot holding a red skateboard"))
        .stdout(predicate::str::contains(", ,").not());
}

#[test]
#[serial]
fn build_json_is_parseable_and_carries_flags() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["build", "a lighthouse", "--format", "json", "--weather", "Foggy"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["subject"], "a lighthouse");
    assert_eq!(value["settings"]["weather"], "Foggy");
    assert_eq!(value["settings"].as_object().unwrap().len(), 13);
}

#[test]
#[serial]
fn build_xml_has_declaration_and_ordered_settings() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["b", "a lighthouse", "-f", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Prompt>"))
        .stdout(predicate::str::contains("<Subject>a lighthouse</Subject>"))
        .stdout(predicate::str::contains("<ShotType>"));
}

#[test]
#[serial]
fn unknown_format_falls_back_to_default() {
    let ctx = TestContext::new();

    let fallback = ctx.cli().args(["build", "a lighthouse", "-f", "toml"]).output().unwrap();
    let default = ctx.cli().args(["build", "a lighthouse", "-f", "default"]).output().unwrap();

    assert!(fallback.status.success());
    assert_eq!(fallback.stdout, default.stdout);
}

#[test]
#[serial]
fn configured_default_format_is_used() {
    let ctx = TestContext::new();
    ctx.write_config("[output]\ndefault_format = \"yaml\"\n");

    ctx.cli()
        .args(["build", "a lighthouse"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("subject: a lighthouse\n"));
}

#[test]
#[serial]
fn unknown_configured_format_falls_back_to_default() {
    let ctx = TestContext::new();
    ctx.write_config("[output]\ndefault_format = \"markdown\"\n");

    ctx.cli()
        .args(["build", "a lighthouse"])
        .assert()
        .success()
        .stdout(predicate::str::contains(", a lighthouse, "));
}

#[test]
#[serial]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("[gemini]\nmax_polls = 0\n");

    ctx.cli()
        .args(["build", "a lighthouse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid config"));
}

#[test]
#[serial]
fn save_records_history_and_reuse_rebuilds() {
    let ctx = TestContext::new();

    ctx.cli().args(["build", "a paper crane", "--weather", "Rainy", "--save"]).assert().success();

    let history = ctx.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["type"], "prompt");
    assert_eq!(history[0]["subject"], "a paper crane");
    assert_eq!(history[0]["source"], "Prompt Builder");

    let id = history[0]["id"].as_str().unwrap().to_string();
    ctx.cli()
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()));

    ctx.cli()
        .args(["h", "reuse", &id, "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"subject\": \"a paper crane\""))
        .stdout(predicate::str::contains("Rainy").not());

    ctx.cli().args(["history", "delete", &id]).assert().success();
    assert!(ctx.history().is_empty());
}

#[test]
#[serial]
fn deleting_unknown_history_item_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["history", "delete", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("History item 'missing' not found"));
}

#[test]
#[serial]
fn options_lists_catalog() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["options", "shot-type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shot Type"));

    ctx.cli()
        .args(["o", "--aspect-ratios"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16:9"));

    ctx.cli()
        .args(["options", "focalLength"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown parameter 'focalLength'"));
}
