//! Interactive card
//!
//! The handler owns the controller and runs it on a tokio runtime in the
//! main thread. The renderer gets its own thread and talks to the handler
//! over two channels:
//! - handler -> renderer: `TuiEvent::Update` with a fresh screen
//! - renderer -> handler: `Command`s from key presses

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use profilecard_runtime::{
    Config, ProfileController, ProfileState, RandomUserClient, ThemeMode, TracingSink,
};

use crate::presentation::presenters::{DisplayOptions, build_screen_view_model};
use crate::presentation::renderers::{TuiEvent, TuiRenderer};

pub fn handle(config: &Config, theme: Option<ThemeMode>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the interactive card needs a terminal; use `profilecard show` instead");
    }

    let options = DisplayOptions::from_config(&config.display)?;
    let client = RandomUserClient::from_config(&config.source)?;
    let sink = TracingSink::new(client.endpoint());
    let state = ProfileState::new(theme.unwrap_or(config.display.theme), config.fetch.overlap);
    let controller = ProfileController::new(Arc::new(client), Arc::new(sink), state);

    let (event_tx, event_rx) = mpsc::channel();
    let (signal_tx, signal_rx) = tokio::sync::mpsc::unbounded_channel();

    let tui_handle = thread::spawn(move || {
        TuiRenderer::new()
            .with_signal_sender(signal_tx)
            .run(event_rx)
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let final_state = runtime.block_on(controller.run(signal_rx, |state| {
        let screen = build_screen_view_model(state, &options);
        // Renderer may already be gone
        let _ = event_tx.send(TuiEvent::Update(Box::new(screen)));
    }));
    tracing::info!(
        in_flight = final_state.in_flight(),
        theme = %final_state.theme(),
        "session ended"
    );

    drop(event_tx);
    // In-flight requests are abandoned, not awaited
    runtime.shutdown_background();

    match tui_handle.join() {
        Ok(result) => result,
        Err(e) => bail!("TUI thread panicked: {:?}", e),
    }
}
