//! Presenter for the profile card.
//!
//! PURE FUNCTIONS from `ProfileState` to `ScreenViewModel`. The choice of
//! screen variant is the whole rendering contract:
//! - loading            -> Loading (indicator only, no controls)
//! - idle, no profile   -> Blank (nothing at all)
//! - idle, with profile -> Card (profile plus refresh and theme controls)

use std::fmt::Write as _;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use profilecard_engine::ProfileState;
use profilecard_runtime::DisplayConfig;
use profilecard_types::{ThemeMode, UserProfile};

use crate::presentation::view_models::{
    CardViewModel, ControlsViewModel, DetailKind, DetailRow, ScreenViewModel,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl DisplayOptions {
    /// Rejects formats chrono cannot parse, and formats that need more than
    /// a calendar date (`%H`, `%z`, ...).
    pub fn new(date_format: impl Into<String>) -> Result<Self> {
        let date_format = date_format.into();
        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            bail!("invalid display.date_format '{}'", date_format);
        }
        if format_date(NaiveDate::MIN, &date_format).is_none() {
            bail!(
                "display.date_format '{}' needs more than a date to render",
                date_format
            );
        }
        Ok(Self { date_format })
    }

    pub fn from_config(config: &DisplayConfig) -> Result<Self> {
        Self::new(config.date_format.clone())
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

pub fn build_screen_view_model(state: &ProfileState, options: &DisplayOptions) -> ScreenViewModel {
    let theme = state.theme();

    if state.is_loading() {
        return ScreenViewModel::Loading { theme };
    }

    match state.profile() {
        Some(profile) => ScreenViewModel::Card(build_card_view_model(profile, theme, options)),
        None => ScreenViewModel::Blank { theme },
    }
}

pub fn build_card_view_model(
    profile: &UserProfile,
    theme: ThemeMode,
    options: &DisplayOptions,
) -> CardViewModel {
    let born_on = profile.born_on();
    let born = format_date(born_on, options.date_format())
        .unwrap_or_else(|| born_on.format("%Y-%m-%d").to_string());

    let details = vec![
        detail(DetailKind::Email, "email", profile.email.clone(), None),
        detail(DetailKind::Phone, "phone", profile.phone.clone(), None),
        detail(DetailKind::Location, "location", profile.place(), None),
        detail(DetailKind::Birthday, "born", born, Some("Born")),
    ];

    CardViewModel {
        theme,
        picture_url: profile.picture.large.clone(),
        full_name: profile.full_name(),
        handle: profile.handle(),
        details,
        controls: ControlsViewModel {
            refresh_label: "Load New User".to_string(),
            theme_toggle_label: match theme {
                ThemeMode::Light => "Dark mode".to_string(),
                ThemeMode::Dark => "Light mode".to_string(),
            },
        },
    }
}

/// `None` when the format asks for fields a date does not have.
fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

fn detail(kind: DetailKind, label: &str, value: String, prefix: Option<&str>) -> DetailRow {
    let text = match prefix {
        Some(prefix) => format!("{} {}", prefix, value),
        None => value.clone(),
    };
    DetailRow {
        kind,
        label: label.to_string(),
        value,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilecard_engine::OverlapPolicy;
    use profilecard_types::FetchError;
    use serde_json::json;

    fn ada() -> UserProfile {
        serde_json::from_value(json!({
            "name": { "first": "Ada", "last": "Lovelace" },
            "login": { "username": "enchantress" },
            "email": "ada@example.com",
            "phone": "020 7946 0000",
            "location": { "city": "London", "country": "United Kingdom" },
            "dob": { "date": "1815-12-10T08:00:00.000Z" },
            "picture": { "large": "https://example.com/ada.jpg" }
        }))
        .unwrap()
    }

    #[test]
    fn loading_hides_everything() {
        let mut state = ProfileState::new(ThemeMode::Dark, OverlapPolicy::LatestWins);
        let ticket = state.begin_fetch();
        state.settle(ticket, Ok(ada()));
        state.begin_fetch();

        let screen = build_screen_view_model(&state, &DisplayOptions::default());
        assert_eq!(
            screen,
            ScreenViewModel::Loading {
                theme: ThemeMode::Dark
            }
        );
        assert!(screen.controls().is_none());
    }

    #[test]
    fn failure_without_profile_is_blank() {
        let mut state = ProfileState::default();
        let ticket = state.begin_fetch();
        state.settle(ticket, Err(FetchError::EmptyResults));

        let screen = build_screen_view_model(&state, &DisplayOptions::default());
        assert_eq!(
            screen,
            ScreenViewModel::Blank {
                theme: ThemeMode::Light
            }
        );
    }

    #[test]
    fn card_carries_profile_fields_verbatim() {
        let card = build_card_view_model(&ada(), ThemeMode::Light, &DisplayOptions::default());

        assert_eq!(card.full_name, "Ada Lovelace");
        assert_eq!(card.handle, "@enchantress");
        assert_eq!(card.picture_url, "https://example.com/ada.jpg");

        let texts: Vec<&str> = card.details.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "ada@example.com",
                "020 7946 0000",
                "London, United Kingdom",
                "Born 1815-12-10",
            ]
        );
        assert_eq!(card.controls.refresh_label, "Load New User");
        assert_eq!(card.controls.theme_toggle_label, "Dark mode");
    }

    #[test]
    fn custom_date_format() {
        let options = DisplayOptions::new("%-m/%-d/%Y").unwrap();
        let card = build_card_view_model(&ada(), ThemeMode::Dark, &options);

        assert_eq!(card.details[3].text, "Born 12/10/1815");
        assert_eq!(card.details[3].value, "12/10/1815");
        assert_eq!(card.controls.theme_toggle_label, "Light mode");
    }

    #[test]
    fn rejects_broken_date_format() {
        assert!(DisplayOptions::new("%Y-%").is_err());
    }

    #[test]
    fn rejects_time_only_specifiers() {
        for format in ["%Y %H:%M", "%S", "%Y-%m-%d %z"] {
            assert!(DisplayOptions::new(format).is_err(), "{format} accepted");
        }
    }

    #[test]
    fn unrenderable_format_falls_back_to_iso_date() {
        let options = DisplayOptions {
            date_format: "%H:%M".to_string(),
        };
        let card = build_card_view_model(&ada(), ThemeMode::Light, &options);

        assert_eq!(card.details[3].text, "Born 1815-12-10");
    }
}
