use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "falcon")]
#[command(about = "FALCON Command Center: security operations from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}
