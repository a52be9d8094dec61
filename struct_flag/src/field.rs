//! Field descriptor tables.
//!
//! A record exposes its fields to the binder through [`Flags::fields`],
//! which lists every field in declaration order together with its tags and
//! a typed mutable accessor. `#[derive(Flags)]` generates the table; it can
//! also be written by hand:
//!
//! ```
//! use struct_flag::{Field, FlagField, Flags};
//!
//! struct Limits {
//!     max_conns: u64,
//!     burst: u64,
//! }
//!
//! impl Flags for Limits {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("max_conns", self.max_conns.field_value())
//!                 .flag("max-conns")
//!                 .usage("connection ceiling"),
//!             Field::new("burst", self.burst.field_value()).private(),
//!         ]
//!     }
//! }
//! ```

use std::fmt;
use std::time::Duration;

use crate::value::Target;

/// Types whose fields can be bound to command-line flags.
pub trait Flags {
    /// Describes every field in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Types that can appear as a field of a [`Flags`] record.
///
/// Implemented for the leaf kinds (`bool`, `f64`, `isize`, `usize`, `i64`,
/// `u64`, `String`, `Duration`) and for every [`Flags`] record. Other types
/// may implement it by returning [`FieldValue::Unsupported`].
pub trait FlagField {
    /// Returns a typed mutable accessor for this value.
    fn field_value(&mut self) -> FieldValue<'_>;
}

macro_rules! leaf_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FlagField for $ty {
                fn field_value(&mut self) -> FieldValue<'_> {
                    FieldValue::Leaf(Target::$variant(self))
                }
            }
        )*
    };
}

leaf_field! {
    bool => Bool,
    f64 => Float,
    isize => Int,
    usize => Uint,
    i64 => Int64,
    u64 => Uint64,
    String => Str,
    Duration => Duration,
}

impl<T: Flags> FlagField for T {
    fn field_value(&mut self) -> FieldValue<'_> {
        FieldValue::Record(self)
    }
}

/// Accessor for a field's value, classified for the binder.
pub enum FieldValue<'a> {
    /// A leaf kind bound directly to a flag.
    Leaf(Target<'a>),
    /// A nested record whose fields are bound under a prefix.
    Record(&'a mut dyn Flags),
    /// A type the binder cannot bind; carries the type's name.
    Unsupported(&'static str),
}

impl FieldValue<'_> {
    /// Short description of the value's type, for diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Leaf(target) => target.kind().name(),
            Self::Record(_) => "record",
            Self::Unsupported(type_name) => type_name,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(target) => f.debug_tuple("Leaf").field(target).finish(),
            Self::Record(_) => f.write_str("Record(..)"),
            Self::Unsupported(type_name) => f.debug_tuple("Unsupported").field(type_name).finish(),
        }
    }
}

/// String tags attached to a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tags {
    /// Flag name override; `"-"` suppresses the field.
    pub flag: Option<&'static str>,
    /// Help text.
    pub usage: Option<&'static str>,
    /// Default value, encoded as text.
    pub default: Option<&'static str>,
    /// Alias registered alongside the primary name.
    pub short: Option<&'static str>,
}

impl Tags {
    /// Returns `true` when the `flag` tag suppresses the field.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.flag == Some("-")
    }
}

/// One entry of a record's descriptor table.
#[derive(Debug)]
pub struct Field<'a> {
    name: &'static str,
    exported: bool,
    tags: Tags,
    value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Describes an exported field with no tags.
    #[must_use]
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            exported: true,
            tags: Tags::default(),
            value,
        }
    }

    /// Marks the field as private; the binder skips it.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Sets the `flag` tag.
    #[must_use]
    pub fn flag(mut self, name: &'static str) -> Self {
        self.tags.flag = Some(name);
        self
    }

    /// Sets the `usage` tag.
    #[must_use]
    pub fn usage(mut self, usage: &'static str) -> Self {
        self.tags.usage = Some(usage);
        self
    }

    /// Sets the `default` tag.
    #[must_use]
    pub fn default_value(mut self, text: &'static str) -> Self {
        self.tags.default = Some(text);
        self
    }

    /// Sets the `short` tag.
    #[must_use]
    pub fn short(mut self, alias: &'static str) -> Self {
        self.tags.short = Some(alias);
        self
    }

    /// Declared field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the field is visible to the binder.
    #[must_use]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Tags attached to the field.
    #[must_use]
    pub const fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Accessor for the field's value.
    #[must_use]
    pub const fn value(&self) -> &FieldValue<'a> {
        &self.value
    }

    /// Consumes the descriptor, yielding the accessor.
    #[must_use]
    pub fn into_value(self) -> FieldValue<'a> {
        self.value
    }
}
