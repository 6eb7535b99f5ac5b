use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, compile::compile, info::info, init::init, lookup::lookup},
    exit_status::ExitStatus,
};

/// Dispatches to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Compile(cmd)) => compile(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Info) => info(),
        Some(Command::Init(cmd)) => init(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
