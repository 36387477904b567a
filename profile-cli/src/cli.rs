use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "profile")]
#[command(about = "Profile screen: sign in, view your profile, contact support")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config directory (default: $PROFILE_CONFIG_DIR, else ./.profile)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
