//! A `ProfileSource` that replays a script.
//!
//! Each call to `fetch_profile` consumes the next step. Gated steps wait for
//! their [`Gate`] to be opened, which lets a test decide the order in which
//! overlapping fetches settle.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use profilecard_runtime::ProfileSource;
use profilecard_types::{FetchError, UserProfile};
use tokio::sync::oneshot;

type Outcome = Result<UserProfile, FetchError>;

enum Step {
    Ready(Outcome),
    Gated(oneshot::Receiver<()>, Outcome),
}

/// Releases one gated step.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

#[derive(Default)]
pub struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, profile: UserProfile) -> Self {
        self.push(Step::Ready(Ok(profile)));
        self
    }

    pub fn then_err(self, error: FetchError) -> Self {
        self.push(Step::Ready(Err(error)));
        self
    }

    /// Append a step that settles only once the returned gate is opened.
    pub fn gated(&self, outcome: Outcome) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(Step::Gated(rx, outcome));
        Gate(tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, step: Step) {
        self.steps.lock().unwrap().push_back(step);
    }
}

#[async_trait]
impl ProfileSource for ScriptedSource {
    async fn fetch_profile(&self) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().unwrap().pop_front();

        match step {
            Some(Step::Ready(outcome)) => outcome,
            Some(Step::Gated(gate, outcome)) => {
                let _ = gate.await;
                outcome
            }
            None => Err(FetchError::Network("script exhausted".to_string())),
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
