//! TUI View Components
//!
//! Ratatui widgets for the profile card screen. Each view borrows its view
//! model and only maps it onto cells; which screen to show and which controls
//! exist was already decided by the presenter.

pub mod card;
pub mod loading;
pub mod screen;

pub use card::CardView;
pub use loading::LoadingView;
pub use screen::ScreenView;

use profilecard_types::ThemeMode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            // slate / teal
            ThemeMode::Light => Self {
                background: Color::Rgb(241, 245, 249),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(30, 41, 59),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(13, 148, 136),
                border: Color::Rgb(203, 213, 225),
            },
            // gray / yellow
            ThemeMode::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                surface: Color::Rgb(31, 41, 55),
                text: Color::Rgb(243, 244, 246),
                muted: Color::Rgb(156, 163, 175),
                accent: Color::Rgb(250, 204, 21),
                border: Color::Rgb(75, 85, 99),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted).bg(self.surface)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.surface)
            .add_modifier(Modifier::BOLD)
    }
}

/// Rect of at most `width` x `height` centered in `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ() {
        let light = Palette::for_theme(ThemeMode::Light);
        let dark = Palette::for_theme(ThemeMode::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.accent, dark.accent);
    }

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
