use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::super::report::print_info;
use super::load_project;
use crate::config::ConfigOverrides;

pub fn info() -> Result<ExitStatus> {
    let loaded = load_project(&ConfigOverrides::default())?;
    print_info(&loaded);
    Ok(ExitStatus::Success)
}
