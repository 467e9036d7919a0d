use clap::{Parser, Subcommand};
use keywatch_core::cli;
use keywatch_core::cli::conf::ConfigCmd;
use keywatch_core::conf::load_or_default;
use keywatch_core::ingest::SourceSpec;
use keywatch_core::logging::{LogMode, default_log_mode, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "keywatch",
    version,
    about = "Keywatch: live status board for a key-slot device's serial console"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow the device stream and show what it says
    Watch {
        /// Path to the keywatch config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Capture file or serial device to read instead of the configured source
        #[arg(long)]
        source: Option<PathBuf>,

        #[arg(long, group = "mode")]
        raw: bool,

        #[arg(long, group = "mode")]
        pretty: bool,

        #[arg(long, group = "mode")]
        stats: bool,

        #[arg(long, group = "mode")]
        json: bool,
    },

    /// Classify lines given on the command line
    Classify {
        /// Lines as the device would print them
        #[arg(required = true)]
        lines: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging();

    match cli.command {
        Command::Watch {
            config,
            source,
            raw,
            pretty,
            stats,
            json,
        } => {
            let mode = if raw {
                LogMode::Raw
            } else if pretty {
                LogMode::Pretty
            } else if stats {
                LogMode::Stats
            } else if json {
                LogMode::Json
            } else {
                default_log_mode()
            };

            let cfg = load_or_default(config.as_deref())?;
            let source = source.map(SourceSpec::Path).unwrap_or_else(|| cfg.source.spec());

            if let Err(e) = cli::watch::run_watch(mode, &cfg, &source) {
                tracing::error!(error = %e, "watch stopped");
                return Err(e);
            }
        }

        Command::Classify { lines, json } => {
            cli::classify::run_classify(&lines, json)?;
        }

        Command::Config { cmd } => {
            cli::conf::run(cmd)?;
        }
    }

    Ok(())
}
