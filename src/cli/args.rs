//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compile`: Generate TypeScript accessors from the message files
//! - `check`: Validate translations without writing anything
//! - `info`: Show the resolved configuration
//! - `init`: Create a `glider.config.json`
//! - `lookup`: Evaluate one message the way its accessor would

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Compile(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Info) | Some(Command::Init(_)) | Some(Command::Lookup(_)) | None => {
                false
            }
        }
    }
}

/// Common arguments shared by commands that scan messages.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Messages directory (overrides config file)
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory (overrides config file)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Comma-separated locales (overrides config file)
    #[arg(short, long, value_delimiter = ',', value_name = "LOCALES")]
    pub locales: Option<Vec<String>>,

    /// Skip translation completeness checks
    #[arg(long)]
    pub no_validate: bool,

    /// Do not generate namespace objects
    #[arg(long)]
    pub no_namespaces: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the config file in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Message path, e.g. `nav.home` or `items[0]`
    pub path: String,

    /// Message group, relative to the messages directory (default: root)
    #[arg(short, long, default_value = "")]
    pub group: String,

    /// Locale passed explicitly to the accessor
    #[arg(long)]
    pub lang: Option<String>,

    /// Ambient locale used when `--lang` is not given
    #[arg(long, env = "GLIDER_LOCALE", value_name = "LOCALE")]
    pub current_locale: Option<String>,

    /// Parameter value, may be repeated: --param name=Ada
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got \"{}\"", raw)),
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate TypeScript accessor functions from the message files
    Compile(CompileCommand),
    /// Check that every locale has every translation
    Check(CheckCommand),
    /// Show the resolved configuration
    Info,
    /// Initialize a new glider.config.json configuration file
    Init(InitCommand),
    /// Print what the accessor for a message returns
    Lookup(LookupCommand),
}
