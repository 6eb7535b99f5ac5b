use anyhow::Result;

use super::super::args::CompileCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{
    print_compile_failure, print_compile_summary, print_validation_error, print_warnings,
};
use super::{from_cwd, load_project};
use crate::{compiler, config::ConfigOverrides};

pub fn compile(cmd: CompileCommand) -> Result<ExitStatus> {
    let overrides = ConfigOverrides {
        messages_dir: from_cwd(cmd.common.input.as_deref())?,
        output_dir: from_cwd(cmd.output.as_deref())?,
        locales: cmd.locales,
        no_validate: cmd.no_validate,
        no_namespaces: cmd.no_namespaces,
    };
    let loaded = load_project(&overrides)?;

    match compiler::compile(&loaded) {
        Ok(outcome) => {
            print_warnings(&outcome.warnings);
            print_compile_summary(&outcome, &loaded.output_dir(), cmd.common.verbose);
            Ok(ExitStatus::Success)
        }
        Err(err) if err.is_validation_failure() => {
            print_validation_error(&err);
            print_compile_failure();
            Ok(ExitStatus::Failure)
        }
        Err(err) => Err(err.into()),
    }
}
