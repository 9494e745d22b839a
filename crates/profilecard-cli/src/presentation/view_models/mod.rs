pub mod card;

pub use card::{CardViewModel, ControlsViewModel, DetailKind, DetailRow, ScreenViewModel};
