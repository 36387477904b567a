//! profile - terminal front end for the profile screen
//!
//! # Examples
//!
//! ```bash
//! # Sign in (password may also come from PROFILE_PASSWORD)
//! profile login --email jane@example.com --password hunter22
//!
//! # Show the synced profile
//! profile show --pretty
//!
//! # Open the support chat
//! profile open messaging
//! ```

use profile_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    profile_cli::run(Cli::parse()).await
}
