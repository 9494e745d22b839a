use std::sync::Mutex;

use profilecard_engine::{ErrorSink, FetchTicket};
use profilecard_types::FetchError;

/// Keeps every report for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(FetchTicket, FetchError)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(FetchTicket, FetchError)> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, ticket: FetchTicket, error: &FetchError) {
        self.records.lock().unwrap().push((ticket, error.clone()));
    }
}
