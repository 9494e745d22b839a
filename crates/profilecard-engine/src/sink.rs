use std::sync::Arc;

use profilecard_types::FetchError;

use crate::state::FetchTicket;

/// Where failed fetches are reported. The user never sees these.
pub trait ErrorSink: Send + Sync {
    fn report(&self, ticket: FetchTicket, error: &FetchError);
}

impl<T: ErrorSink + ?Sized> ErrorSink for Arc<T> {
    fn report(&self, ticket: FetchTicket, error: &FetchError) {
        (**self).report(ticket, error)
    }
}

/// Drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn report(&self, _ticket: FetchTicket, _error: &FetchError) {}
}
