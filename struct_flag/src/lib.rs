//! Expose the fields of a configuration struct as command-line flags.
//!
//! Deriving [`Flags`] builds a descriptor table listing each field's name,
//! visibility, tags and a typed mutable accessor. [`bind_to`] walks that
//! table, registers one flag per eligible field on a [`FlagSet`], and binds
//! the flag to the field so that parsing writes straight into the struct.
//!
//! ```
//! use std::time::Duration;
//! use struct_flag::{FlagSet, Flags, bind_to};
//!
//! #[derive(Flags)]
//! struct Server {
//!     #[flag(name = "addr", usage = "listen address", short = "a")]
//!     pub address: String,
//!     #[flag(default = "30s")]
//!     pub timeout: Duration,
//!     pub limits: Limits,
//! }
//!
//! #[derive(Flags)]
//! struct Limits {
//!     #[flag(name = "conns")]
//!     pub max_conns: u64,
//! }
//!
//! let mut server = Server {
//!     address: String::from("127.0.0.1:8080"),
//!     timeout: Duration::ZERO,
//!     limits: Limits { max_conns: 64 },
//! };
//! let mut flags = FlagSet::new("server");
//! bind_to(&mut flags, "", &mut server);
//! flags.parse_from(["server", "-a", "0.0.0.0:80", "--limits-conns", "512"])?;
//! drop(flags);
//!
//! assert_eq!(server.address, "0.0.0.0:80");
//! assert_eq!(server.timeout, Duration::from_secs(30));
//! assert_eq!(server.limits.max_conns, 512);
//! # Ok::<(), struct_flag::FlagError>(())
//! ```
//!
//! Naming rules:
//!
//! - A field is named after its declaration unless `#[flag(name = "...")]`
//!   renames it; `#[flag(skip)]` or `name = "-"` leaves it out.
//! - Nested records prefix their fields with their own name and `-`.
//! - Private fields never become flags.
//!
//! The default of each flag is the field's value at bind time, unless a
//! `default` tag supplies one. Tags that do not parse fall back to the zero
//! value of the field's type.

extern crate self as struct_flag;

pub use struct_flag_macros::Flags;

mod binder;
pub mod duration;
mod error;
mod field;
mod flag_set;
mod value;

pub use binder::{Binder, SEPARATOR, UnsupportedPolicy, bind, bind_to, compose_name};
pub use error::{FlagError, FlagResult, RegistrationError, ValueError, is_display_request};
pub use field::{Field, FieldValue, FlagField, Flags, Tags};
pub use flag_set::{Flag, FlagSet, SlotId};
pub use value::{FlagValue, Kind, Target};
