pub mod config;
pub mod controller;
pub mod error;
pub mod sink;
pub mod source;

pub use config::{
    Config, DEFAULT_ENDPOINT, DisplayConfig, FetchConfig, LoggingConfig, SourceConfig,
    default_log_path, resolve_config_path,
};
pub use controller::{Command, ProfileController};
pub use error::{Error, Result};
pub use sink::TracingSink;
pub use source::{ProfileSource, RandomUserClient};

pub use profilecard_engine::{
    ErrorSink, FetchTicket, NullSink, OverlapPolicy, Phase, ProfileState, Settlement,
};
pub use profilecard_types::{FetchError, ThemeMode, UserProfile};
