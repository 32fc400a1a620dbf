//! Terminal front end: a command shell standing in for the overview page and
//! its date picker.

pub mod commands;
pub mod context;
pub mod errors;
pub mod output;
pub mod shell;
pub mod table;

pub use context::{CliMode, ShellContext};
pub use errors::{CliError, CommandError};
pub use shell::run_cli;
