//! Report formatting and printing utilities.
//!
//! Everything the CLI shows to the user goes through here. Separate from
//! the compiler so glider can be used as a library without printing.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use serde_json::Value;

use crate::{
    compiler::{CheckOutcome, CompileOutcome},
    config::ConfigLoadResult,
    error::Error,
    parsers::json::ScanWarning,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// `en: 3, es: 2`
pub fn format_counts(counts: &[(String, usize)]) -> String {
    counts
        .iter()
        .map(|(locale, count)| format!("{}: {}", locale, count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

pub fn print_warnings(warnings: &[ScanWarning]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[ScanWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning.message);
    }
}

/// Print a compile or check failure caused by the translations themselves.
pub fn print_validation_error(error: &Error) {
    print_validation_error_to(error, &mut io::stderr().lock());
}

pub fn print_validation_error_to<W: Write>(error: &Error, writer: &mut W) {
    let _ = writeln!(writer, "{}: {}", "error".bold().red(), error);
}

pub fn print_compile_summary(outcome: &CompileOutcome, output_dir: &Path, verbose: bool) {
    print_compile_summary_to(outcome, output_dir, verbose, &mut io::stdout().lock());
}

pub fn print_compile_summary_to<W: Write>(
    outcome: &CompileOutcome,
    output_dir: &Path,
    verbose: bool,
    writer: &mut W,
) {
    if verbose {
        for group in &outcome.groups {
            let _ = writeln!(
                writer,
                "  {} {} ({})",
                group.name.bold(),
                plural(group.message_count, "message", "messages"),
                format_counts(&group.record_counts)
            );
        }
        for path in &outcome.written {
            let _ = writeln!(writer, "  {} {}", "wrote".dimmed(), path.display());
        }
    }

    let messages: usize = outcome.groups.iter().map(|g| g.message_count).sum();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Compiled {} in {} into {}",
            plural(messages, "message", "messages"),
            plural(outcome.groups.len(), "group", "groups"),
            output_dir.display()
        )
        .green()
    );
}

pub fn print_compile_failure() {
    print_compile_failure_to(&mut io::stderr().lock());
}

pub fn print_compile_failure_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        "Compilation failed, no files were written".red()
    );
}

pub fn print_check_report(outcome: &CheckOutcome, verbose: bool) {
    print_check_report_to(outcome, verbose, &mut io::stdout().lock());
}

pub fn print_check_report_to<W: Write>(outcome: &CheckOutcome, verbose: bool, writer: &mut W) {
    for group in &outcome.groups {
        match &group.failure {
            Some(error) => print_validation_error_to(error, writer),
            None if verbose => {
                let _ = writeln!(
                    writer,
                    "  {} {} {} ({})",
                    SUCCESS_MARK.green(),
                    group.name.bold(),
                    plural(group.message_count, "message", "messages"),
                    format_counts(&group.record_counts)
                );
            }
            None => {}
        }
    }

    let failed = outcome.failed_groups().count();
    let total = outcome.groups.len();
    if failed == 0 {
        let messages: usize = outcome.groups.iter().map(|g| g.message_count).sum();
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} in {} - all translations complete",
                plural(messages, "message", "messages"),
                plural(total, "group", "groups")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} have problems",
                failed,
                plural(total, "group", "groups")
            )
            .red()
        );
    }
}

pub fn print_info(loaded: &ConfigLoadResult) {
    print_info_to(loaded, &mut io::stdout().lock());
}

pub fn print_info_to<W: Write>(loaded: &ConfigLoadResult, writer: &mut W) {
    let config = &loaded.config;
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let _ = writeln!(writer, "{}", "glider configuration".bold());
    let _ = writeln!(writer, "  Config File: {}", loaded.path.display());
    let _ = writeln!(writer, "  Locales: {}", config.locales.join(", "));
    let _ = writeln!(writer, "  Default Locale: {}", config.default_locale);
    let _ = writeln!(
        writer,
        "  Messages Directory: {}",
        loaded.messages_dir().display()
    );
    let _ = writeln!(
        writer,
        "  Output Directory: {}",
        loaded.output_dir().display()
    );
    let _ = writeln!(
        writer,
        "  Validate Translations: {}",
        yes_no(config.validate_translations)
    );
    let _ = writeln!(
        writer,
        "  Generate Namespaces: {}",
        yes_no(config.generate_namespaces)
    );
}

/// Print a looked-up value: strings raw, anything else as JSON.
pub fn print_value(value: Option<&Value>) {
    print_value_to(value, &mut io::stdout().lock());
}

pub fn print_value_to<W: Write>(value: Option<&Value>, writer: &mut W) {
    let _ = match value {
        Some(Value::String(text)) => writeln!(writer, "{}", text),
        Some(other) => writeln!(
            writer,
            "{}",
            serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())
        ),
        None => writeln!(writer, "{}", "undefined".dimmed()),
    };
}
