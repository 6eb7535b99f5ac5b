use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, translations are valid
/// - `Failure` (1): Translations failed validation, or `init` found an existing config
/// - `Error` (2): Command failed for any other reason (config, I/O, malformed JSON, identifiers)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
