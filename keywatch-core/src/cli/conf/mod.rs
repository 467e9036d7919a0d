mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config file
        #[arg(default_value = "keywatch.hcl")]
        path: PathBuf,

        /// Print issues without colour
        #[arg(short, long, default_value = "false")]
        plain: bool,

        /// Print the validation report as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Print resolved configuration
    Dump {
        #[arg(default_value = "keywatch.hcl")]
        path: PathBuf,

        /// Output as JSON instead of HCL
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Path to config file
        #[arg(default_value = "keywatch.hcl")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain, json } => check(path, plain, json),
        ConfigCmd::Dump { path, json } => dump(path, json),
        ConfigCmd::Init { path } => init(path),
    }
}
