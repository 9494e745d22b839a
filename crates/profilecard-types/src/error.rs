use thiserror::Error;

/// Everything that can go wrong while fetching a profile.
///
/// All variants collapse into the single "fetch failed" outcome: the caller
/// reports them and keeps whatever profile it already had.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or body transfer failure
    #[error("request failed: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },

    /// Body was not JSON or not a JSON object
    #[error("response body is not valid JSON: {0}")]
    InvalidBody(String),

    /// The API answered with its `{"error": "..."}` envelope
    #[error("API reported an error: {0}")]
    Api(String),

    #[error("response contained no results")]
    EmptyResults,

    /// First result is missing a required field or carries a bad date
    #[error("first result is malformed: {0}")]
    MalformedRecord(String),
}

impl FetchError {
    /// Stable short name, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Status { .. } => "status",
            FetchError::InvalidBody(_) => "invalid_body",
            FetchError::Api(_) => "api",
            FetchError::EmptyResults => "empty_results",
            FetchError::MalformedRecord(_) => "malformed_record",
        }
    }
}
