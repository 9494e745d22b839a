//! TUI renderer for the profile card
//!
//! Receives `ScreenViewModel` updates over a std channel and draws them with
//! ratatui. Key presses become `RendererSignal`s sent back to the controller.
//!
//! ## Design:
//! - Renderer owns no domain state, only the last screen it was given
//! - Which keys are live is read off the screen: refresh and theme toggle
//!   exist only while a card is shown
//! - Quitting works on every screen

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use profilecard_runtime::Command;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::UnboundedSender;

use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::ScreenView;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TUI events sent from handler to renderer
pub enum TuiEvent {
    Update(Box<ScreenViewModel>),
}

/// Signals sent from renderer to handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererSignal {
    Refresh,
    ToggleTheme,
    Quit,
}

impl From<RendererSignal> for Command {
    fn from(signal: RendererSignal) -> Self {
        match signal {
            RendererSignal::Refresh => Command::Refresh,
            RendererSignal::ToggleTheme => Command::ToggleTheme,
            RendererSignal::Quit => Command::Quit,
        }
    }
}

pub struct TuiRenderer {
    current_screen: Option<ScreenViewModel>,
    should_quit: bool,
    signal_tx: Option<UnboundedSender<Command>>,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            current_screen: None,
            should_quit: false,
            signal_tx: None,
        }
    }

    pub fn with_signal_sender(mut self, tx: UnboundedSender<Command>) -> Self {
        self.signal_tx = Some(tx);
        self
    }

    /// Take over the terminal until the user quits or the handler hangs up.
    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        // Dropping the sender tells the controller to stop
        self.signal_tx = None;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(signal) = self.handle_key_event(key) {
                        self.send(signal);
                    }
                }
            }

            // Only the newest screen matters
            loop {
                match rx.try_recv() {
                    Ok(TuiEvent::Update(screen)) => self.current_screen = Some(*screen),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn send(&self, signal: RendererSignal) {
        if let Some(tx) = &self.signal_tx {
            if tx.send(signal.into()).is_err() {
                tracing::debug!(?signal, "controller gone, signal dropped");
            }
        }
    }

    /// Map a key press to a signal. Refresh and theme toggle are ignored
    /// unless the current screen carries controls.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<RendererSignal> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let has_controls = self
            .current_screen
            .as_ref()
            .and_then(ScreenViewModel::controls)
            .is_some();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Some(RendererSignal::Quit)
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                Some(RendererSignal::Quit)
            }
            KeyCode::Char('r') if has_controls => Some(RendererSignal::Refresh),
            KeyCode::Char('t') if has_controls => Some(RendererSignal::ToggleTheme),
            _ => None,
        }
    }

    pub fn current_screen(&self) -> Option<&ScreenViewModel> {
        self.current_screen.as_ref()
    }

    pub fn set_screen(&mut self, screen: ScreenViewModel) {
        self.current_screen = Some(screen);
    }

    fn render(&self, f: &mut Frame) {
        // Nothing has arrived yet: same as a blank screen
        let Some(screen) = &self.current_screen else {
            return;
        };
        f.render_widget(ScreenView::new(screen), f.area());
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
