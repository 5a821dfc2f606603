// src/cli/mod.rs
pub mod commands;
pub mod parser;

use std::ffi::OsString;

use commands::CommandExecutor;

use crate::error::SignError;

/// Parse the process arguments and sign the named boot block.
pub fn run() -> Result<(), SignError> {
    run_from(std::env::args_os())
}

pub fn run_from<I, T>(args: I) -> Result<(), SignError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parser::Cli::try_parse_args(args)? {
        Some(cli) => cli.execute(),
        None => Ok(()),
    }
}
