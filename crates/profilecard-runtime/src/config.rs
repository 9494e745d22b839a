use crate::{Error, Result};
use profilecard_engine::OverlapPolicy;
use profilecard_types::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PROFILECARD_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.profilecard/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PROFILECARD_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("profilecard").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".profilecard").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Where the TUI writes its log when no file is configured.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("profilecard"))
        .unwrap_or_else(std::env::temp_dir)
        .join("profilecard.log")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    /// No timeout unless set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Theme at startup
    pub theme: ThemeMode,
    /// chrono format string for the birth date
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub overlap: OverlapPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. "info" or "profilecard_runtime=debug"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub display: DisplayConfig,
    pub fetch: FetchConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Write the default config, refusing to clobber an existing file unless forced.
    pub fn init_at(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }

        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.source.endpoint.trim().is_empty() {
            return Err(Error::Config("source.endpoint must not be empty".to_string()));
        }
        if self.display.date_format.trim().is_empty() {
            return Err(Error::Config(
                "display.date_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
