pub mod error;
pub mod profile;
pub mod response;
pub mod theme;

pub use error::FetchError;
pub use profile::*;
pub use response::{RandomUserResponse, ResponseInfo, decode_first_profile};
pub use theme::ThemeMode;
