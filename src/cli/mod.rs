//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
