//! Flag registry backed by `clap`.
//!
//! A [`FlagSet`] owns mutable borrows of the fields it writes to. Flags are
//! defined against a storage slot; several flags may share one slot, in
//! which case the occurrence parsed last wins. Parsing builds a
//! [`clap::Command`] from the registered flags, delegates argv tokenizing to
//! clap, and writes the parsed values back through the slots.

mod command;

use std::ffi::OsString;
use std::path::Path;

use crate::error::{FlagError, FlagResult, RegistrationError};
use crate::value::{FlagValue, Kind, Target};

/// Handle to a storage slot owned by a [`FlagSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

/// A registered flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Flag {
    name: String,
    usage: String,
    default: FlagValue,
    slot: SlotId,
}

impl Flag {
    /// Name used on the command line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Value written to the storage at registration.
    #[must_use]
    pub const fn default_value(&self) -> &FlagValue {
        &self.default
    }

    /// Kind of the flag's value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.default.kind()
    }

    /// Storage slot the flag writes to.
    #[must_use]
    pub const fn slot(&self) -> SlotId {
        self.slot
    }
}

/// A set of command-line flags bound to storage borrowed for `'a`.
///
/// # Examples
///
/// ```
/// use struct_flag::{FlagSet, FlagValue, Target};
///
/// let mut verbose = false;
/// let mut flags = FlagSet::new("demo");
/// let slot = flags.slot(Target::Bool(&mut verbose));
/// flags.var(slot, "verbose", FlagValue::Bool(false), "log more");
/// flags.var(slot, "v", FlagValue::Bool(false), "log more");
/// flags.parse_from(["demo", "-v"])?;
/// drop(flags);
/// assert!(verbose);
/// # Ok::<(), struct_flag::FlagError>(())
/// ```
#[derive(Debug)]
pub struct FlagSet<'a> {
    name: String,
    about: Option<String>,
    slots: Vec<Target<'a>>,
    flags: Vec<Flag>,
    conflicts: Vec<RegistrationError>,
}

impl<'a> FlagSet<'a> {
    /// Creates an empty flag set. `name` is the program name shown in help
    /// and error output.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: None,
            slots: Vec::new(),
            flags: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Creates an empty flag set named after the running program.
    #[must_use]
    pub fn command_line() -> Self {
        let name = std::env::args_os()
            .next()
            .and_then(|arg0| {
                Path::new(&arg0)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| String::from("command"));
        Self::new(name)
    }

    /// Sets the description shown at the top of the help output.
    #[must_use]
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Program name used in help and error output.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Takes ownership of a storage borrow and returns a handle flags can be
    /// defined against.
    pub fn slot(&mut self, target: Target<'a>) -> SlotId {
        self.slots.push(target);
        SlotId(self.slots.len() - 1)
    }

    /// Defines a flag writing to `slot`, and stores `default` in the slot.
    ///
    /// Conflicts (duplicate or malformed names, a default whose kind differs
    /// from the slot, or a foreign slot handle) leave the set unchanged; they
    /// are recorded and returned by the next [`parse_from`](Self::parse_from).
    pub fn var(&mut self, slot: SlotId, name: &str, default: FlagValue, usage: &str) {
        if let Err(conflict) = self.try_var(slot, name, default, usage) {
            tracing::warn!(flag = name, error = %conflict, "flag registration rejected");
            self.conflicts.push(conflict);
        }
    }

    fn try_var(
        &mut self,
        slot: SlotId,
        name: &str,
        default: FlagValue,
        usage: &str,
    ) -> Result<(), RegistrationError> {
        validate_name(name)?;
        if self.lookup(name).is_some() {
            return Err(RegistrationError::Redefined {
                name: name.to_owned(),
            });
        }
        let target = self
            .slots
            .get_mut(slot.0)
            .ok_or_else(|| RegistrationError::UnknownSlot {
                name: name.to_owned(),
            })?;
        target
            .set(default.clone())
            .map_err(|found| RegistrationError::KindMismatch {
                name: name.to_owned(),
                expected: target.kind(),
                found,
            })?;
        tracing::debug!(flag = name, kind = %default.kind(), default = %default, "defined flag");
        self.flags.push(Flag {
            name: name.to_owned(),
            usage: usage.to_owned(),
            default,
            slot,
        });
        Ok(())
    }

    /// Looks up a flag by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    /// Iterates over the flags in registration order.
    pub fn flags(&self) -> std::slice::Iter<'_, Flag> {
        self.flags.iter()
    }

    /// Number of registered flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` when no flag has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Registration conflicts recorded so far.
    #[must_use]
    pub fn conflicts(&self) -> &[RegistrationError] {
        &self.conflicts
    }

    /// Reads the current value of the storage behind the named flag.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<FlagValue> {
        let flag = self.lookup(name)?;
        self.slots.get(flag.slot.0).map(Target::get)
    }

    /// Sets the named flag from command-line text.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnknownFlag`] when no flag has that name and
    /// [`FlagError::InvalidValue`] when the text does not parse.
    pub fn set(&mut self, name: &str, text: &str) -> FlagResult<()> {
        let flag = self.lookup(name).ok_or_else(|| FlagError::UnknownFlag {
            name: name.to_owned(),
        })?;
        let slot = flag.slot;
        let value = flag
            .kind()
            .parse(text)
            .map_err(|source| FlagError::InvalidValue {
                name: name.to_owned(),
                value: text.to_owned(),
                source,
            })?;
        self.assign(slot, value);
        Ok(())
    }

    fn assign(&mut self, slot: SlotId, value: FlagValue) {
        if let Some(target) = self.slots.get_mut(slot.0) {
            if let Err(found) = target.set(value) {
                tracing::warn!(expected = %target.kind(), %found, "parsed value kind differs from storage");
            }
        }
    }

    /// Builds the `clap` command describing the registered flags.
    #[must_use]
    pub fn command(&self) -> clap::Command {
        command::build(self)
    }

    /// Parses `args` (including the program name) and writes flag values to
    /// their storage. Returns the positional arguments left after the flags.
    ///
    /// Flags may be given as `--name value`, `--name=value`, or `-n value` for
    /// single-character names. Boolean flags take no separate value: `--name`
    /// sets true and `--name=false` sets false.
    ///
    /// # Errors
    ///
    /// Returns the first recorded registration conflict as
    /// [`FlagError::Registration`], or [`FlagError::Cli`] when clap rejects
    /// the arguments (help requests included; see
    /// [`FlagError::is_display_request`]).
    pub fn parse_from<I, T>(&mut self, args: I) -> FlagResult<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        if let Some(conflict) = self.conflicts.first() {
            return Err(conflict.clone().into());
        }
        let matches = self.command().try_get_matches_from(args)?;
        let (updates, positionals) = command::collect(self, &matches);
        for (slot, value) in updates {
            self.assign(slot, value);
        }
        Ok(positionals)
    }

    /// Parses the arguments of the running process.
    ///
    /// # Errors
    ///
    /// See [`parse_from`](Self::parse_from).
    pub fn parse(&mut self) -> FlagResult<Vec<String>> {
        self.parse_from(std::env::args_os())
    }
}

fn validate_name(name: &str) -> Result<(), RegistrationError> {
    let reason = if name.is_empty() {
        "is empty"
    } else if name.starts_with('-') {
        "begins with -"
    } else if name.contains('=') {
        "contains ="
    } else if name.chars().any(char::is_whitespace) {
        "contains whitespace"
    } else {
        return Ok(());
    };
    Err(RegistrationError::InvalidName {
        name: name.to_owned(),
        reason,
    })
}
