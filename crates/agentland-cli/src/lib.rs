//! agentland-docs CLI library.
//!
//! This library provides the command-line half of `agentland-docs`: argument
//! resolution, configuration, terminal prompts and output formatting around the
//! copy and substitution engines in `agentland-core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod templates;

pub use cli::{resolve, Cli, Command, InitArgs};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use prompt::TerminalPrompter;
