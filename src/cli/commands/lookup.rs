use anyhow::{Result, bail};

use super::super::args::LookupCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_value;
use super::load_project;
use crate::{
    compiler::{display_name, load_group},
    config::ConfigOverrides,
    core::accessor::{Accessor, FixedLocale, LocaleSource, NoLocale, ParamValues},
};

pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let loaded = load_project(&ConfigOverrides::default())?;
    let analysis = load_group(&loaded, &cmd.group)?;

    let Some(data) = analysis.catalog.get(&cmd.path) else {
        bail!(
            "no message \"{}\" in {}",
            cmd.path,
            display_name(cmd.group.trim_matches('/'))
        );
    };

    let source: Box<dyn LocaleSource> = match cmd.current_locale {
        Some(locale) => Box::new(FixedLocale(locale)),
        None => Box::new(NoLocale),
    };
    let params: Option<ParamValues> =
        (!cmd.params.is_empty()).then(|| cmd.params.into_iter().collect());

    let accessor = Accessor::new(data, &loaded.config.default_locale);
    let value = accessor.call(cmd.lang.as_deref(), params.as_ref(), source.as_ref());
    print_value(value.as_ref());

    Ok(ExitStatus::Success)
}
