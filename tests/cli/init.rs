use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["locales"], serde_json::json!(["en"]));
    assert_eq!(parsed["defaultLocale"], "en");
    assert_eq!(parsed["messagesDir"], "messages");
    assert_eq!(parsed["outputDir"], "src/glider");
    assert_eq!(parsed["validateTranslations"], true);
    assert_eq!(parsed["generateNamespaces"], true);

    assert!(
        content.contains("\n  \"locales\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created"));

    let content = test.read_file("glider.config.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_in_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["init", "--dir", "app"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("app/glider.config.json").is_file());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file("glider.config.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("glider.config.json already exists"));
    assert_eq!(test.read_file("glider.config.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("messages/en.json", r#"{"title": "Title"}"#)?;

    let output = test.compile_command().output()?;
    assert!(
        output.status.success(),
        "Compile should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("src/glider/_index.ts").is_file());

    Ok(())
}
