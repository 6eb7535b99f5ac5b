use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_check_report, print_warnings};
use super::{from_cwd, load_project};
use crate::{compiler, config::ConfigOverrides};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let overrides = ConfigOverrides {
        messages_dir: from_cwd(cmd.common.input.as_deref())?,
        ..Default::default()
    };
    let loaded = load_project(&overrides)?;

    let outcome = compiler::check(&loaded)?;
    print_warnings(&outcome.warnings);
    print_check_report(&outcome, cmd.common.verbose);

    if outcome.is_valid() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
