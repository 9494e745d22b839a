//! tracing subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a file. One-shot commands log to
//! stderr, which keeps stdout clean for piping.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::Stderr => "warn",
            LogTarget::File(_) => "info",
        }
    }
}

/// Pick the filter directive: `--log-level`, then `RUST_LOG`, then config,
/// then the target's default.
pub fn filter_directive(
    cli_level: Option<&str>,
    env_level: Option<&str>,
    config_level: Option<&str>,
    target: &LogTarget,
) -> String {
    cli_level
        .or(env_level)
        .or(config_level)
        .unwrap_or(target.default_directive())
        .to_string()
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file output gets flushed.
pub fn init(
    cli_level: Option<&str>,
    config_level: Option<&str>,
    target: LogTarget,
) -> Result<Option<WorkerGuard>> {
    let env_level = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(cli_level, env_level.as_deref(), config_level, &target);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{}'", directive))?;

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "profilecard.log".to_string());

            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(&dir)
                .with_context(|| format!("failed to open log file in {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;
            Ok(Some(guard))
        }
    }
}
