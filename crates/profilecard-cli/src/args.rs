use crate::types::{LogLevel, OutputFormat, ThemeArg};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "profilecard")]
#[command(about = "Show a random user's profile card in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: platform config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Random-user API endpoint to query")]
    pub endpoint: Option<String>,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive card: [r] load new user, [t] toggle theme, [q] quit (default)
    Tui {
        #[arg(long)]
        theme: Option<ThemeArg>,
    },

    /// Fetch one user and print the card
    Show {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        #[arg(long)]
        theme: Option<ThemeArg>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved config file path
    Path,

    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
