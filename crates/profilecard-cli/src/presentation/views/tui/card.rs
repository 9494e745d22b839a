//! Card View Component
//!
//! Picture, name and handle up top, the detail rows below, then the two
//! controls. Card width is fixed and the card is centered in the frame.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

use crate::presentation::view_models::{CardViewModel, DetailKind};

use super::{Palette, centered};

const CARD_WIDTH: u16 = 64;

pub struct CardView<'a> {
    model: &'a CardViewModel,
}

impl<'a> CardView<'a> {
    pub fn new(model: &'a CardViewModel) -> Self {
        Self { model }
    }

    fn lines(&self, palette: &Palette) -> Vec<Line<'a>> {
        let model = self.model;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("picture ", palette.muted()),
                Span::styled(model.picture_url.as_str(), palette.card()),
            ]),
            Line::default(),
            Line::from(Span::styled(model.full_name.as_str(), palette.accent())),
            Line::from(Span::styled(model.handle.as_str(), palette.muted())),
            Line::default(),
        ];

        for row in &model.details {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", detail_glyph(row.kind)), palette.muted()),
                Span::styled(row.text.as_str(), palette.card()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[r] ", palette.accent()),
            Span::styled(model.controls.refresh_label.as_str(), palette.card()),
            Span::raw("   "),
            Span::styled("[t] ", palette.accent()),
            Span::styled(model.controls.theme_toggle_label.as_str(), palette.card()),
            Span::raw("   "),
            Span::styled("[q] ", palette.muted()),
            Span::styled("quit", palette.muted()),
        ]));

        lines
    }
}

fn detail_glyph(kind: DetailKind) -> &'static str {
    match kind {
        DetailKind::Email => "✉",
        DetailKind::Phone => "☎",
        DetailKind::Location => "⌂",
        DetailKind::Birthday => "✦",
    }
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.model.theme);
        buf.set_style(area, palette.base());

        let lines = self.lines(&palette);
        // borders + vertical padding
        let height = lines.len() as u16 + 4;
        let card_area = centered(area, CARD_WIDTH, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.muted().fg(palette.border))
            .style(palette.card())
            .padding(Padding::new(2, 2, 1, 1));

        Paragraph::new(lines).block(block).render(card_area, buf);
    }
}
