//! profile-cli library
//!
//! Command parsing, terminal adapters and the command runner behind the
//! `profile` binary.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod presenter;

#[cfg(test)]
mod tests;

pub use app::run;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
