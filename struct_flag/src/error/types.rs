//! Error enums for flag registration, value parsing and argv parsing.

use thiserror::Error;

use crate::duration::DurationError;
use crate::value::Kind;

/// Convenience alias for results produced by a [`FlagSet`](crate::FlagSet).
pub type FlagResult<T> = Result<T, FlagError>;

/// Errors reported by a [`FlagSet`](crate::FlagSet).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// Error parsing command-line arguments, including help requests.
    #[error("Failed to parse command-line arguments: {0}")]
    Cli(#[from] Box<clap::Error>),

    /// A flag definition was rejected when it was registered.
    #[error("Invalid flag registration: {0}")]
    Registration(#[from] RegistrationError),

    /// [`FlagSet::set`](crate::FlagSet::set) named a flag that does not exist.
    #[error("no such flag -{name}")]
    UnknownFlag {
        /// Name passed by the caller.
        name: String,
    },

    /// [`FlagSet::set`](crate::FlagSet::set) received text the flag's kind
    /// cannot represent.
    #[error("invalid value {value:?} for flag -{name}: {source}")]
    InvalidValue {
        /// Flag being assigned.
        name: String,
        /// Text that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ValueError,
    },
}

impl From<clap::Error> for FlagError {
    fn from(err: clap::Error) -> Self {
        Self::Cli(Box::new(err))
    }
}

/// Conflicts detected while defining flags.
///
/// The binder has no error channel, so the registry records these and
/// reports the first one from the next parse call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistrationError {
    /// Two flags were defined under the same name.
    #[error("flag redefined: {name}")]
    Redefined {
        /// Name defined more than once.
        name: String,
    },

    /// The name cannot be used on a command line.
    #[error("flag name {name:?} {reason}")]
    InvalidName {
        /// Rejected name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// The default value does not match the kind of the bound storage.
    #[error("flag {name}: default is {found} but storage is {expected}")]
    KindMismatch {
        /// Flag being defined.
        name: String,
        /// Kind of the bound storage.
        expected: Kind,
        /// Kind of the supplied default.
        found: Kind,
    },

    /// The slot handle was not issued by this flag set.
    #[error("flag {name}: unknown storage slot")]
    UnknownSlot {
        /// Flag being defined.
        name: String,
    },
}

/// Failures converting command-line text into a typed flag value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueError {
    /// Text is not one of the accepted boolean spellings.
    #[error("invalid boolean {text:?}")]
    Bool {
        /// Rejected text.
        text: String,
    },

    /// Text is not an integer literal.
    #[error("invalid integer {text:?}")]
    Integer {
        /// Rejected text.
        text: String,
    },

    /// The integer does not fit the flag's kind.
    #[error("integer {text:?} out of range for {kind}")]
    OutOfRange {
        /// Rejected text.
        text: String,
        /// Kind the value was destined for.
        kind: Kind,
    },

    /// Text is not a floating-point literal.
    #[error("invalid float {text:?}")]
    Float {
        /// Rejected text.
        text: String,
    },

    /// Text is not a duration literal.
    #[error(transparent)]
    Duration(#[from] DurationError),
}
