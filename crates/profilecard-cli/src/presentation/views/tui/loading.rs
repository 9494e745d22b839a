use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::{Palette, centered};

pub const LOADING_TEXT: &str = "Loading...";

/// Loading indicator. Nothing else is drawn while a fetch is in flight.
pub struct LoadingView {
    palette: Palette,
}

impl LoadingView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Widget for LoadingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.palette.base());

        let line = centered(area, area.width, 1);
        Paragraph::new(LOADING_TEXT)
            .style(Style::default().fg(self.palette.muted))
            .alignment(Alignment::Center)
            .render(line, buf);
    }
}
