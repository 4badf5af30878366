mod common;

use common::TestContext;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn list_shows_builtin_templates() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("retro-3d-icon"))
        .stdout(predicate::str::contains("laika-video"));
}

#[test]
#[serial]
fn offline_template_fills_without_api_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["t", "fill", "retro-3d-icon", "a teapot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a teapot\""))
        .stdout(predicate::str::contains("[your object here]").not());

    let history = ctx.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["subject"], "a teapot");
}

#[test]
#[serial]
fn model_template_requires_api_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["template", "fill", "laika-image", "a moth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment variable 'GEMINI_API_KEY' is not set"));
}

#[test]
#[serial]
fn custom_template_lifecycle() {
    let ctx = TestContext::new();
    let file = ctx.work_dir().join("poster.json");
    fs::write(&file, "{\"subject\": \"[SUBJECT]\"}").unwrap();

    ctx.cli()
        .args(["template", "save", "Poster", "--file", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved template 'Poster'"));

    let stored = fs::read_to_string(ctx.home().join("templates.yml")).unwrap();
    let templates: Vec<serde_yaml::Value> = serde_yaml::from_str(&stored).unwrap();
    let id = templates[0]["id"].as_str().unwrap().to_string();

    ctx.cli()
        .args(["template", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Poster (custom)"))
        .stdout(predicate::str::contains("[SUBJECT]"));

    ctx.cli().args(["template", "delete", &id]).assert().success();
    ctx.cli()
        .args(["template", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
#[serial]
fn unknown_template_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["template", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'nope' not found"));
}
