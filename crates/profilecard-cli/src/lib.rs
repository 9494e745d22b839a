// NOTE: profilecard layering
//
// Handler (handlers/*) owns the controller and drives it on a tokio runtime.
// Presenter (presentation/presenters) turns ProfileState into a ScreenViewModel
// with every decision already made: which screen, which controls, which text.
// Renderer (presentation/renderers) only draws view models and turns key
// presses into signals. It runs on its own thread and never sees domain state.
//
// Fetch failures never surface as errors here. They are reported to the
// TracingSink and the screen simply keeps what it had.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
