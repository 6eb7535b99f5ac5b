use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_complete_translations() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"title": "Title"}"#),
        ("messages/es.json", r#"{"title": "Título"}"#),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Checked 1 message in 1 group - all translations complete"));
    assert!(!test.root().join("src/glider").exists());

    Ok(())
}

#[test]
fn test_check_reports_every_failing_group() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"a": "A", "b": "B"}"#),
        ("messages/es.json", r#"{"a": "A"}"#),
        ("messages/admin/en.json", r#"{"list": []}"#),
        ("messages/admin/es.json", r#"{"list": "x"}"#),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("error: missing translations in (root):"));
    assert!(out.contains("error: value kinds differ between locales in admin:"));
    assert!(out.contains("2 of 2 groups have problems"));

    Ok(())
}

#[test]
fn test_check_ignores_validate_setting() -> Result<()> {
    let test = CliTest::with_file(
        "glider.config.json",
        r#"{"locales": ["en", "es"], "defaultLocale": "en", "validateTranslations": false}"#,
    )?;
    test.write_file("messages/en.json", r#"{"a": "A"}"#)?;
    test.write_file("messages/es.json", "{}")?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_check_missing_messages_dir() -> Result<()> {
    let test = CliTest::with_file("glider.config.json", crate::EN_ES_CONFIG)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_check_input_override() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("i18n/en.json", r#"{"a": "A"}"#),
        ("i18n/es.json", r#"{"a": "A"}"#),
    ])?;

    let output = test.check_command().args(["--input", "i18n"]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    Ok(())
}
