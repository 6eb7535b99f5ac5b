use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_info_shows_config() -> Result<()> {
    let test = CliTest::with_file(
        "glider.config.json",
        r#"{
  "locales": ["en", "es"],
  "defaultLocale": "es",
  "generateNamespaces": false
}"#,
    )?;

    let output = test.command().arg("info").output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("Locales: en, es"));
    assert!(out.contains("Default Locale: es"));
    assert!(out.contains(&format!(
        "Messages Directory: {}",
        test.root().join("messages").display()
    )));
    assert!(out.contains("Validate Translations: yes"));
    assert!(out.contains("Generate Namespaces: no"));

    Ok(())
}

#[test]
fn test_info_finds_config_in_parent() -> Result<()> {
    let test = CliTest::with_file(
        "glider.config.json",
        r#"{"locales": ["en"], "defaultLocale": "en"}"#,
    )?;
    test.write_file("nested/deeper/.keep", "")?;

    let output = test
        .command()
        .current_dir(test.root().join("nested/deeper"))
        .arg("info")
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(&format!(
        "Output Directory: {}",
        test.root().join("src/glider").display()
    )));

    Ok(())
}

#[test]
fn test_missing_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("info").output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: glider.config.json not found"));
    assert!(err.contains("glider init"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(
        "glider.config.json",
        r#"{"locales": ["en"], "defaultLocale": "fr"}"#,
    )?;

    let output = test.command().arg("info").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("defaultLocale \"fr\" is not one of the configured locales")
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    for command in ["compile", "check", "info", "init", "lookup"] {
        assert!(out.contains(command), "help should list {command}");
    }

    Ok(())
}
