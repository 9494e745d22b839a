//! View models for the profile card screen.
//!
//! These carry only display-ready strings and flags. The renderer must be able
//! to draw the screen, and decide which keys are live, from this data alone.

use profilecard_types::ThemeMode;
use serde::Serialize;

/// Complete screen state. Exactly one of three variants is ever on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenViewModel {
    /// A fetch is in flight: loading indicator only
    Loading { theme: ThemeMode },
    /// Nothing loaded and nothing in flight: render nothing
    Blank { theme: ThemeMode },
    Card(CardViewModel),
}

impl ScreenViewModel {
    pub fn theme(&self) -> ThemeMode {
        match self {
            ScreenViewModel::Loading { theme } | ScreenViewModel::Blank { theme } => *theme,
            ScreenViewModel::Card(card) => card.theme,
        }
    }

    /// Controls exist only alongside a displayed profile.
    pub fn controls(&self) -> Option<&ControlsViewModel> {
        match self {
            ScreenViewModel::Card(card) => Some(&card.controls),
            ScreenViewModel::Loading { .. } | ScreenViewModel::Blank { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardViewModel {
    pub theme: ThemeMode,
    pub picture_url: String,
    pub full_name: String,
    pub handle: String,
    pub details: Vec<DetailRow>,
    pub controls: ControlsViewModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    Email,
    Phone,
    Location,
    Birthday,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub kind: DetailKind,
    /// Short label for column layouts ("email")
    pub label: String,
    /// Bare value ("1815-12-10")
    pub value: String,
    /// Sentence form for the card ("Born 1815-12-10")
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlsViewModel {
    pub refresh_label: String,
    /// Names the mode the toggle switches *to*
    pub theme_toggle_label: String,
}
