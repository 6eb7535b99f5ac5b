use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_compile_writes_output() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"greeting": "Hello {name}", "nav": {"home": "Home"}}"#),
        ("messages/es.json", r#"{"greeting": "Hola {name}", "nav": {"home": "Inicio"}}"#),
        ("messages/dashboard/en.json", r#"{"title": "Dashboard"}"#),
        ("messages/dashboard/es.json", r#"{"title": "Panel"}"#),
    ])?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Compiled 3 messages in 2 groups into"));

    let runtime = test.read_file("src/glider/_runtime.ts")?;
    assert!(runtime.contains("export const locales = [\"en\", \"es\"] as const;"));

    let root = test.read_file("src/glider/messages/messages.ts")?;
    assert!(root.contains("export interface GreetingParams {"));
    assert!(root.contains(
        "export function greeting(lang?: Locale, params?: GreetingParams, resolveLocale: LocaleResolver = getLocale): string {"
    ));
    assert!(root.contains(
        "export function nav_home(lang?: Locale, resolveLocale: LocaleResolver = getLocale): string {"
    ));
    assert!(root.contains("export const messages = {"));

    let dashboard = test.read_file("src/glider/messages/dashboard/messages.ts")?;
    assert!(dashboard.contains("from \"../../_runtime.js\";"));
    assert!(dashboard.contains("export function dashboard_title("));
    assert!(dashboard.contains("export const dashboard_messages = {"));

    let index = test.read_file("src/glider/_index.ts")?;
    assert!(index.contains("} from \"./messages/messages.js\";"));
    assert!(index.contains("} from \"./messages/dashboard/messages.js\";"));

    Ok(())
}

#[test]
fn test_compile_array_messages() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"items": ["One {n}", "Two"]}"#),
        ("messages/es.json", r#"{"items": ["Uno {n}", "Dos"]}"#),
    ])?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let module = test.read_file("src/glider/messages/messages.ts")?;
    assert!(module.contains("export function items(lang?: Locale, params?: ItemsParams"));
    assert!(module.contains("export function items_0(lang?: Locale, params?: Items_0Params"));
    assert!(module.contains("export function items_1(lang?: Locale, resolveLocale"));
    assert!(module.contains("  items: [\n"));

    Ok(())
}

#[test]
fn test_compile_missing_translation_fails() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"greeting": "Hello", "bye": "Bye"}"#),
        ("messages/es.json", r#"{"greeting": "Hola"}"#),
    ])?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("error: missing translations in (root):"));
    assert!(err.contains("Locale \"es\" is missing 1 translation(s):"));
    assert!(err.contains("      - bye"));
    assert!(err.contains("Compilation failed, no files were written"));
    assert!(!test.root().join("src/glider").exists());

    Ok(())
}

#[test]
fn test_compile_missing_locale_file_fails() -> Result<()> {
    let test = CliTest::with_messages(&[("messages/en.json", r#"{"a": "A"}"#)])?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing locale file \"es.json\" in (root)"));

    Ok(())
}

#[test]
fn test_compile_no_validate_falls_back() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"greeting": "Hello", "bye": "Bye"}"#),
        ("messages/es.json", r#"{"greeting": "Hola"}"#),
    ])?;

    let output = test.compile_command().arg("--no-validate").output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let module = test.read_file("src/glider/messages/messages.ts")?;
    assert!(module.contains("export function bye("));

    Ok(())
}

#[test]
fn test_compile_overrides() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("locales/en.json", r#"{"a": "A"}"#),
        ("locales/de.json", r#"{"a": "A"}"#),
    ])?;

    let output = test
        .compile_command()
        .args(["-i", "locales", "-o", "generated", "--locales", "en,de"])
        .arg("--no-namespaces")
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let runtime = test.read_file("generated/_runtime.ts")?;
    assert!(runtime.contains("[\"en\", \"de\"]"));
    let module = test.read_file("generated/messages/messages.ts")?;
    assert!(!module.contains("export const messages"));

    Ok(())
}

#[test]
fn test_compile_warns_about_unconfigured_locale() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"a": "A"}"#),
        ("messages/es.json", r#"{"a": "A"}"#),
        ("messages/fr.json", r#"{"a": "A"}"#),
    ])?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: ignoring"));
    assert!(stderr(&output).contains("locale \"fr\" is not configured"));

    Ok(())
}

#[test]
fn test_compile_identifier_collision_is_an_error() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"a": {"b": "x"}, "a_b": "y"}"#),
        ("messages/es.json", r#"{"a": {"b": "x"}, "a_b": "y"}"#),
    ])?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: identifier `a_b` in (root)"));

    Ok(())
}

#[test]
fn test_compile_malformed_json_is_an_error() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"a": "A""#),
        ("messages/es.json", r#"{"a": "A"}"#),
    ])?;

    let output = test.compile_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to parse"));

    Ok(())
}

#[test]
fn test_compile_verbose_lists_groups_and_files() -> Result<()> {
    let test = CliTest::with_messages(&[
        ("messages/en.json", r#"{"a": "A", "b": "B"}"#),
        ("messages/es.json", r#"{"a": "A", "b": "B"}"#),
    ])?;

    let output = test.compile_command().arg("-v").output()?;
    let out = stdout(&output);
    assert!(out.contains("  (root) 2 messages (en: 2, es: 2)"));
    assert!(out.contains("_runtime.ts"));
    assert!(out.contains("messages.ts"));

    Ok(())
}
