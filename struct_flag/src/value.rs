//! Leaf flag kinds, their owned values, and the storage they bind to.
//!
//! [`Kind`] is the closed set of field types that become leaf flags. Each
//! kind has an owned [`FlagValue`] representation and a [`Target`] variant
//! carrying a typed mutable borrow of the field it writes to.

use std::fmt;
use std::time::Duration;

use crate::duration;
use crate::error::ValueError;

/// Field types that can be registered as leaf flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`
    Bool,
    /// `f64`
    Float,
    /// `isize`
    Int,
    /// `usize`
    Uint,
    /// `i64`
    Int64,
    /// `u64`
    Uint64,
    /// `String`
    Str,
    /// `std::time::Duration`
    Duration,
}

impl Kind {
    /// Short type name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Float => "float64",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Str => "string",
            Self::Duration => "duration",
        }
    }

    /// Placeholder shown for the flag's value in help output.
    #[must_use]
    pub const fn value_name(self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Float => "FLOAT",
            Self::Int | Self::Int64 => "INT",
            Self::Uint | Self::Uint64 => "UINT",
            Self::Str => "STRING",
            Self::Duration => "DURATION",
        }
    }

    /// The zero value of this kind.
    #[must_use]
    pub const fn zero(self) -> FlagValue {
        match self {
            Self::Bool => FlagValue::Bool(false),
            Self::Float => FlagValue::Float(0.0),
            Self::Int => FlagValue::Int(0),
            Self::Uint => FlagValue::Uint(0),
            Self::Int64 => FlagValue::Int64(0),
            Self::Uint64 => FlagValue::Uint64(0),
            Self::Str => FlagValue::Str(String::new()),
            Self::Duration => FlagValue::Duration(Duration::ZERO),
        }
    }

    /// Decodes a `default` tag.
    ///
    /// Decoding never fails: text that does not parse yields the kind's zero
    /// value. Booleans are true only for the exact text `"true"`, `uint`
    /// defaults must fit in 32 bits, and strings are taken verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use struct_flag::{FlagValue, Kind};
    ///
    /// assert_eq!(Kind::Int.decode_default("42"), FlagValue::Int(42));
    /// assert_eq!(Kind::Int.decode_default("not-a-number"), FlagValue::Int(0));
    /// assert_eq!(Kind::Bool.decode_default("yes"), FlagValue::Bool(false));
    /// ```
    #[must_use]
    pub fn decode_default(self, text: &str) -> FlagValue {
        match self {
            Self::Bool => FlagValue::Bool(text == "true"),
            Self::Float => FlagValue::Float(text.parse().unwrap_or_default()),
            Self::Int => FlagValue::Int(text.parse().unwrap_or_default()),
            Self::Uint => FlagValue::Uint(
                text.parse::<u32>()
                    .ok()
                    .and_then(|value| usize::try_from(value).ok())
                    .unwrap_or_default(),
            ),
            Self::Int64 => FlagValue::Int64(text.parse().unwrap_or_default()),
            Self::Uint64 => FlagValue::Uint64(text.parse().unwrap_or_default()),
            Self::Str => FlagValue::Str(text.to_owned()),
            Self::Duration => FlagValue::Duration(duration::parse(text).unwrap_or_default()),
        }
    }

    /// Parses command-line text into a value of this kind.
    ///
    /// Booleans accept `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
    /// counterparts. Integers accept an optional sign, `0x`/`0o`/`0b`
    /// prefixes and `_` digit separators. Durations use the syntax described
    /// in [`duration`](crate::duration).
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when `text` is not valid for this kind.
    pub fn parse(self, text: &str) -> Result<FlagValue, ValueError> {
        match self {
            Self::Bool => parse_bool(text).map(FlagValue::Bool),
            Self::Float => text
                .parse()
                .map(FlagValue::Float)
                .map_err(|_| ValueError::Float {
                    text: text.to_owned(),
                }),
            Self::Int => parse_signed(text, self).map(FlagValue::Int),
            Self::Uint => parse_unsigned(text, self).map(FlagValue::Uint),
            Self::Int64 => parse_signed(text, self).map(FlagValue::Int64),
            Self::Uint64 => parse_unsigned(text, self).map(FlagValue::Uint64),
            Self::Str => Ok(FlagValue::Str(text.to_owned())),
            Self::Duration => Ok(FlagValue::Duration(duration::parse(text)?)),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn parse_bool(text: &str) -> Result<bool, ValueError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ValueError::Bool {
            text: text.to_owned(),
        }),
    }
}

/// Splits an integer literal into its sign and magnitude.
fn parse_magnitude(text: &str) -> Result<(bool, u128), ValueError> {
    let invalid = || ValueError::Integer {
        text: text.to_owned(),
    };
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let lowered = unsigned.to_ascii_lowercase();
    let (radix, digits) = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| lowered.strip_prefix(prefix).map(|rest| (radix, rest)))
        .unwrap_or((10, lowered.as_str()));
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return Err(invalid());
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if cleaned.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let magnitude = u128::from_str_radix(&cleaned, radix).map_err(|_| invalid())?;
    Ok((negative, magnitude))
}

fn parse_signed<T: TryFrom<i128>>(text: &str, kind: Kind) -> Result<T, ValueError> {
    let out_of_range = || ValueError::OutOfRange {
        text: text.to_owned(),
        kind,
    };
    let (negative, magnitude) = parse_magnitude(text)?;
    let signed = i128::try_from(magnitude).map_err(|_| out_of_range())?;
    let value = if negative { -signed } else { signed };
    T::try_from(value).map_err(|_| out_of_range())
}

fn parse_unsigned<T: TryFrom<u128>>(text: &str, kind: Kind) -> Result<T, ValueError> {
    let (negative, magnitude) = parse_magnitude(text)?;
    if negative || text.starts_with('+') {
        return Err(ValueError::Integer {
            text: text.to_owned(),
        });
    }
    T::try_from(magnitude).map_err(|_| ValueError::OutOfRange {
        text: text.to_owned(),
        kind,
    })
}

/// An owned value of one of the leaf [`Kind`]s.
#[derive(Clone, Debug, PartialEq)]
pub enum FlagValue {
    /// Boolean value.
    Bool(bool),
    /// 64-bit float value.
    Float(f64),
    /// Native-width signed integer value.
    Int(isize),
    /// Native-width unsigned integer value.
    Uint(usize),
    /// 64-bit signed integer value.
    Int64(i64),
    /// 64-bit unsigned integer value.
    Uint64(u64),
    /// Text value.
    Str(String),
    /// Duration value.
    Duration(Duration),
}

impl FlagValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Float(_) => Kind::Float,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Int64(_) => Kind::Int64,
            Self::Uint64(_) => Kind::Uint64,
            Self::Str(_) => Kind::Str,
            Self::Duration(_) => Kind::Duration,
        }
    }

    /// Returns `true` when this is the zero value of its kind.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == self.kind().zero()
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Int64(value) => write!(f, "{value}"),
            Self::Uint64(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::Duration(value) => f.write_str(&duration::format(*value)),
        }
    }
}

macro_rules! flag_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FlagValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

flag_value_from! {
    bool => Bool,
    f64 => Float,
    isize => Int,
    usize => Uint,
    i64 => Int64,
    u64 => Uint64,
    String => Str,
    Duration => Duration,
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

/// A mutable borrow of a field's storage, tagged with its [`Kind`].
#[derive(Debug)]
pub enum Target<'a> {
    /// Storage for a `bool` field.
    Bool(&'a mut bool),
    /// Storage for an `f64` field.
    Float(&'a mut f64),
    /// Storage for an `isize` field.
    Int(&'a mut isize),
    /// Storage for a `usize` field.
    Uint(&'a mut usize),
    /// Storage for an `i64` field.
    Int64(&'a mut i64),
    /// Storage for a `u64` field.
    Uint64(&'a mut u64),
    /// Storage for a `String` field.
    Str(&'a mut String),
    /// Storage for a `Duration` field.
    Duration(&'a mut Duration),
}

impl Target<'_> {
    /// The kind of the bound storage.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Float(_) => Kind::Float,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Int64(_) => Kind::Int64,
            Self::Uint64(_) => Kind::Uint64,
            Self::Str(_) => Kind::Str,
            Self::Duration(_) => Kind::Duration,
        }
    }

    /// Reads the current value of the bound storage.
    #[must_use]
    pub fn get(&self) -> FlagValue {
        match self {
            Self::Bool(slot) => FlagValue::Bool(**slot),
            Self::Float(slot) => FlagValue::Float(**slot),
            Self::Int(slot) => FlagValue::Int(**slot),
            Self::Uint(slot) => FlagValue::Uint(**slot),
            Self::Int64(slot) => FlagValue::Int64(**slot),
            Self::Uint64(slot) => FlagValue::Uint64(**slot),
            Self::Str(slot) => FlagValue::Str((**slot).clone()),
            Self::Duration(slot) => FlagValue::Duration(**slot),
        }
    }

    /// Writes `value` into the bound storage.
    ///
    /// # Errors
    ///
    /// Returns the kind of `value` when it differs from the storage kind;
    /// the storage is left untouched.
    pub fn set(&mut self, value: FlagValue) -> Result<(), Kind> {
        match (self, value) {
            (Self::Bool(slot), FlagValue::Bool(value)) => **slot = value,
            (Self::Float(slot), FlagValue::Float(value)) => **slot = value,
            (Self::Int(slot), FlagValue::Int(value)) => **slot = value,
            (Self::Uint(slot), FlagValue::Uint(value)) => **slot = value,
            (Self::Int64(slot), FlagValue::Int64(value)) => **slot = value,
            (Self::Uint64(slot), FlagValue::Uint64(value)) => **slot = value,
            (Self::Str(slot), FlagValue::Str(value)) => **slot = value,
            (Self::Duration(slot), FlagValue::Duration(value)) => **slot = value,
            (_, other) => return Err(other.kind()),
        }
        Ok(())
    }
}
