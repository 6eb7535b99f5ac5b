use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    CliTest::with_messages(&[
        (
            "messages/en.json",
            r#"{"greeting": "Hello {name}", "only_en": "English", "steps": ["Go {n}", "Stop"]}"#,
        ),
        (
            "messages/es.json",
            r#"{"greeting": "Hola {name}", "steps": ["Ve {n}", "Para"]}"#,
        ),
        ("messages/admin/en.json", r#"{"title": "Admin"}"#),
        ("messages/admin/es.json", r#"{"title": "Administración"}"#),
    ])
}

#[test]
fn test_lookup_default_locale() -> Result<()> {
    let test = project()?;

    let output = test.lookup_command("greeting").output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hello {name}\n");

    Ok(())
}

#[test]
fn test_lookup_with_lang_and_params() -> Result<()> {
    let test = project()?;

    let output = test
        .lookup_command("greeting")
        .args(["--lang", "es", "--param", "name=Ada"])
        .output()?;
    assert_eq!(stdout(&output), "Hola Ada\n");

    Ok(())
}

#[test]
fn test_lookup_ambient_locale_from_env() -> Result<()> {
    let test = project()?;

    let output = test
        .lookup_command("greeting")
        .env("GLIDER_LOCALE", "es")
        .output()?;
    assert_eq!(stdout(&output), "Hola {name}\n");

    let output = test
        .lookup_command("greeting")
        .env("GLIDER_LOCALE", "es")
        .args(["--lang", "en"])
        .output()?;
    assert_eq!(stdout(&output), "Hello {name}\n");

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_default_locale() -> Result<()> {
    let test = project()?;

    let output = test
        .lookup_command("only_en")
        .args(["--lang", "es"])
        .output()?;
    assert_eq!(stdout(&output), "English\n");

    Ok(())
}

#[test]
fn test_lookup_array() -> Result<()> {
    let test = project()?;

    let output = test
        .lookup_command("steps")
        .args(["--lang", "es", "--param", "n=3"])
        .output()?;
    assert_eq!(stdout(&output), "[\n  \"Ve 3\",\n  \"Para\"\n]\n");

    let output = test.lookup_command("steps[1]").output()?;
    assert_eq!(stdout(&output), "Stop\n");

    Ok(())
}

#[test]
fn test_lookup_in_group() -> Result<()> {
    let test = project()?;

    let output = test
        .lookup_command("title")
        .args(["--group", "admin", "--lang", "es"])
        .output()?;
    assert_eq!(stdout(&output), "Administración\n");

    Ok(())
}

#[test]
fn test_lookup_unknown_message() -> Result<()> {
    let test = project()?;

    let output = test.lookup_command("nope").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no message \"nope\" in (root)"));

    let output = test.lookup_command("title").args(["--group", "missing"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no message group \"missing\""));

    Ok(())
}
