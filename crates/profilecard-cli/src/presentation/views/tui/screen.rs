use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::presentation::view_models::ScreenViewModel;

use super::{CardView, LoadingView, Palette};

/// Top-level view: dispatches on the screen variant.
pub struct ScreenView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> ScreenView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ScreenView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.model {
            ScreenViewModel::Loading { theme } => {
                LoadingView::new(Palette::for_theme(*theme)).render(area, buf)
            }
            // Themed background and nothing else
            ScreenViewModel::Blank { theme } => {
                buf.set_style(area, Palette::for_theme(*theme).base())
            }
            ScreenViewModel::Card(card) => CardView::new(card).render(area, buf),
        }
    }
}
