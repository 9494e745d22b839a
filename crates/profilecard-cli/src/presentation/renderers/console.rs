use std::fmt::Write as _;

use anyhow::Result;
use owo_colors::OwoColorize;
use profilecard_types::ThemeMode;
use serde::Serialize;

use crate::presentation::view_models::CardViewModel;

type Rgb = (u8, u8, u8);

fn accent(theme: ThemeMode) -> Rgb {
    match theme {
        ThemeMode::Light => (13, 148, 136),
        ThemeMode::Dark => (250, 204, 21),
    }
}

fn muted(theme: ThemeMode) -> Rgb {
    match theme {
        ThemeMode::Light => (100, 116, 139),
        ThemeMode::Dark => (156, 163, 175),
    }
}

/// Prints cards and JSON to stdout.
pub struct ConsoleRenderer {
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn print_card(&self, card: &CardViewModel) {
        print!("{}", self.render_card(card));
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn render_card(&self, card: &CardViewModel) -> String {
        let mut out = String::new();
        let theme = card.theme;

        let _ = writeln!(
            out,
            "{} {}",
            self.paint(&card.full_name, accent(theme), true),
            self.paint(&format!("({})", card.handle), muted(theme), false)
        );

        let rows = card
            .details
            .iter()
            .map(|row| (row.label.as_str(), row.value.as_str()))
            .chain(std::iter::once(("picture", card.picture_url.as_str())));

        for (label, value) in rows {
            let label = format!("{:<9}", label);
            let _ = writeln!(out, "  {} {}", self.paint(&label, muted(theme), false), value);
        }

        out
    }

    fn paint(&self, text: &str, (r, g, b): Rgb, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        if bold {
            text.truecolor(r, g, b).bold().to_string()
        } else {
            text.truecolor(r, g, b).to_string()
        }
    }
}
