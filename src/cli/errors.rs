use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::OverviewError;

/// Failure of a single shell command. Reported, then the shell continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("No date range selected. Use `range <from> <to>` or `load <path>`.")]
    NoRange,
    #[error(transparent)]
    Core(#[from] OverviewError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failure that stops the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] OverviewError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}
