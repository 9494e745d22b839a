pub mod card;

pub use card::{DisplayOptions, build_card_view_model, build_screen_view_model};
