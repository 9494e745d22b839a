use std::fmt;
use std::path::PathBuf;

/// Result type for profilecard-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Setup-time errors. Fetch failures are not errors here: they travel as
/// [`profilecard_types::FetchError`] and end up in the sink.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client could not be constructed
    Client(String),

    /// Refusing to overwrite an existing file
    AlreadyExists(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Client(msg) => write!(f, "HTTP client error: {}", msg),
            Error::AlreadyExists(path) => {
                write!(f, "{} already exists (use --force to overwrite)", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Client(_) | Error::AlreadyExists(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Client(err.to_string())
    }
}
