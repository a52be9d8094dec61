//! Error types produced by the flag registry and value parsers.

mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{FlagError, FlagResult, RegistrationError, ValueError};
