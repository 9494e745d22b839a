use std::path::Path;

use anyhow::{Result, bail};
use profilecard_runtime::{Config, Error};

use crate::args::ConfigCommand;

pub fn handle(config_path: &Path, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommand::Init { force } => match Config::init_at(config_path, force) {
            Ok(_) => println!("Wrote default config to {}", config_path.display()),
            Err(Error::AlreadyExists(path)) => bail!(
                "config already exists at {} (pass --force to overwrite)",
                path.display()
            ),
            Err(e) => return Err(e.into()),
        },
        ConfigCommand::Show => {
            let config = Config::load_from(config_path)?;
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
