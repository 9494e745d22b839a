use profilecard_engine::{ErrorSink, FetchTicket};
use profilecard_types::FetchError;

/// Reports failed fetches as `tracing` error events.
#[derive(Debug, Clone)]
pub struct TracingSink {
    source: String,
}

impl TracingSink {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl ErrorSink for TracingSink {
    fn report(&self, ticket: FetchTicket, error: &FetchError) {
        tracing::error!(
            ticket = ticket.get(),
            kind = error.kind(),
            source = %self.source,
            "Error fetching user: {}",
            error
        );
    }
}
