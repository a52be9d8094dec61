//! Helpers for classifying errors surfaced by the command-line engine.

use clap::{Error as ClapError, error::ErrorKind};

use super::FlagError;

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// Clap surfaces these requests through dedicated [`ErrorKind`] variants so
/// entry points can delegate to [`clap::Error::exit`] and keep the zero exit
/// status users expect after asking for help.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

impl FlagError {
    /// Returns `true` when the error is a help or version request rather than
    /// a genuine parse failure.
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        match self {
            Self::Cli(err) => is_display_request(err),
            _ => false,
        }
    }
}
