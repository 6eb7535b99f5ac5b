pub mod check;
pub mod compile;
pub mod info;
pub mod init;
pub mod lookup;

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::config::{ConfigLoadResult, ConfigOverrides, load_config};

/// Resolves a command-line path against the working directory.
fn from_cwd(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) if path.is_relative() => Ok(Some(current_dir()?.join(path))),
        other => Ok(other.map(Path::to_path_buf)),
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().context("Failed to read the current directory")
}

/// Finds and loads `glider.config.json` starting from the working directory.
fn load_project(overrides: &ConfigOverrides) -> Result<ConfigLoadResult> {
    Ok(load_config(&current_dir()?, overrides)?)
}
