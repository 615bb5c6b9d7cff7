//! CLI module for coursedb
//!
//! Provides the command-line interface:
//! - menu: interactive advisor loop (default)
//! - load: one-shot load with diagnostic report
//! - list: one-shot sorted course listing
//! - show: one-shot single-course description

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{prompt, read_line, write_line, write_lines};
