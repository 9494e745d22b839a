use super::args::{Cli, Commands};
use super::handlers;
use crate::logging::{self, LogTarget};
use anyhow::Result;
use profilecard_runtime::{Config, default_log_path, resolve_config_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui { theme: None });
    let log_level = cli.log_level.map(|level| level.to_string());

    match command {
        Commands::Config { command } => handlers::config::handle(&config_path, command),

        Commands::Show { format, theme } => {
            let config = load_config(&config_path, cli.endpoint)?;
            let _guard = logging::init(
                log_level.as_deref(),
                config.logging.level.as_deref(),
                LogTarget::Stderr,
            )?;
            handlers::show::handle(&config, format, theme.map(Into::into))
        }

        Commands::Tui { theme } => {
            let config = load_config(&config_path, cli.endpoint)?;
            let log_file = config
                .logging
                .file
                .clone()
                .unwrap_or_else(default_log_path);
            let _guard = logging::init(
                log_level.as_deref(),
                config.logging.level.as_deref(),
                LogTarget::File(log_file),
            )?;
            handlers::tui::handle(&config, theme.map(Into::into))
        }
    }
}

fn load_config(path: &Path, endpoint: Option<String>) -> Result<Config> {
    let mut config = Config::load_from(path)?;
    if let Some(endpoint) = endpoint {
        config.source.endpoint = endpoint;
    }
    Ok(config)
}
