use std::sync::Arc;

use anyhow::Result;
use is_terminal::IsTerminal;
use profilecard_runtime::{
    Config, ProfileController, ProfileState, RandomUserClient, ThemeMode, TracingSink,
};

use crate::presentation::presenters::{DisplayOptions, build_card_view_model};
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::OutputFormat;

/// Fetch once and print. A failed fetch prints nothing: the error goes to
/// the log and the command still succeeds.
pub fn handle(config: &Config, format: OutputFormat, theme: Option<ThemeMode>) -> Result<()> {
    let options = DisplayOptions::from_config(&config.display)?;
    let client = RandomUserClient::from_config(&config.source)?;
    let sink = TracingSink::new(client.endpoint());
    let state = ProfileState::new(theme.unwrap_or(config.display.theme), config.fetch.overlap);
    let mut controller = ProfileController::new(Arc::new(client), Arc::new(sink), state);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let settlement = runtime.block_on(controller.load_once());
    runtime.shutdown_background();
    tracing::debug!(?settlement, "show settled");

    let state = controller.into_state();
    let Some(profile) = state.profile() else {
        return Ok(());
    };

    let color = format == OutputFormat::Plain && std::io::stdout().is_terminal();
    let renderer = ConsoleRenderer::new(color);
    match format {
        OutputFormat::Json => renderer.print_json(profile)?,
        OutputFormat::Plain => {
            renderer.print_card(&build_card_view_model(profile, state.theme(), &options))
        }
    }

    Ok(())
}
