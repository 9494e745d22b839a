//! Async driver for the profile state machine.
//!
//! The controller is the only owner of [`ProfileState`]. Every fetch runs as
//! its own task and reports back over an internal channel, so a slow request
//! never blocks commands and overlapping fetches settle independently.

use std::sync::Arc;

use profilecard_engine::{ErrorSink, FetchTicket, ProfileState, Settlement};
use profilecard_types::{FetchError, ThemeMode, UserProfile};
use tokio::sync::mpsc;

use crate::source::ProfileSource;

/// User actions the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Refresh,
    ToggleTheme,
    Quit,
}

struct Settled {
    ticket: FetchTicket,
    outcome: Result<UserProfile, FetchError>,
}

pub struct ProfileController {
    source: Arc<dyn ProfileSource>,
    sink: Arc<dyn ErrorSink>,
    state: ProfileState,
    settled_tx: mpsc::UnboundedSender<Settled>,
    settled_rx: mpsc::UnboundedReceiver<Settled>,
}

impl ProfileController {
    pub fn new(
        source: Arc<dyn ProfileSource>,
        sink: Arc<dyn ErrorSink>,
        state: ProfileState,
    ) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            source,
            sink,
            state,
            settled_tx,
            settled_rx,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn into_state(self) -> ProfileState {
        self.state
    }

    /// Start a fetch. Must be called from within a tokio runtime.
    pub fn request_profile(&mut self) -> FetchTicket {
        let ticket = self.state.begin_fetch();
        tracing::debug!(
            ticket = ticket.get(),
            in_flight = self.state.in_flight(),
            source = %self.source.describe(),
            "fetch started"
        );

        let source = Arc::clone(&self.source);
        let tx = self.settled_tx.clone();
        tokio::spawn(async move {
            let outcome = source.fetch_profile().await;
            // Receiver is gone only when the controller was dropped.
            let _ = tx.send(Settled { ticket, outcome });
        });

        ticket
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let theme = self.state.toggle_theme();
        tracing::debug!(%theme, "theme toggled");
        theme
    }

    /// Wait for the next in-flight fetch to settle and apply it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn settle_next(&mut self) -> Option<Settlement> {
        if self.state.in_flight() == 0 {
            return None;
        }
        let settled = self.settled_rx.recv().await?;
        Some(self.apply(settled))
    }

    /// Fetch once and wait for that fetch to settle.
    pub async fn load_once(&mut self) -> Settlement {
        let ticket = self.request_profile();
        loop {
            let Some(settled) = self.settled_rx.recv().await else {
                return Settlement::Unknown;
            };
            let is_ours = settled.ticket == ticket;
            let settlement = self.apply(settled);
            if is_ours {
                return settlement;
            }
        }
    }

    /// Mount, then serve commands until `Quit` or until every command sender
    /// is dropped. `observe` sees the state after every change.
    pub async fn run<F>(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut observe: F,
    ) -> ProfileState
    where
        F: FnMut(&ProfileState),
    {
        self.request_profile();
        observe(&self.state);

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Refresh) => {
                        self.request_profile();
                    }
                    Some(Command::ToggleTheme) => {
                        self.toggle_theme();
                    }
                    Some(Command::Quit) | None => break,
                },
                Some(settled) = self.settled_rx.recv() => {
                    if !self.apply(settled).changed_state() {
                        continue;
                    }
                }
            }
            observe(&self.state);
        }

        tracing::debug!(in_flight = self.state.in_flight(), "controller stopped");
        self.state
    }

    fn apply(&mut self, settled: Settled) -> Settlement {
        let Settled { ticket, outcome } = settled;
        let settlement = self.state.settle(ticket, outcome);

        match &settlement {
            Settlement::Applied => {
                if let Some(profile) = self.state.profile() {
                    tracing::info!(
                        ticket = ticket.get(),
                        user = %profile.handle(),
                        "profile loaded"
                    );
                }
            }
            Settlement::Failed(err) => self.sink.report(ticket, err),
            Settlement::Superseded(err) => {
                tracing::debug!(ticket = ticket.get(), "superseded fetch discarded");
                if let Some(err) = err {
                    self.sink.report(ticket, err);
                }
            }
            Settlement::Unknown => {
                tracing::warn!(ticket = ticket.get(), "settlement for unknown fetch ignored");
            }
        }

        settlement
    }
}
