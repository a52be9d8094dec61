//! Walks a record's descriptor table and registers its fields as flags.

use tracing::{debug, trace};

use crate::field::{FieldValue, Flags, Tags};
use crate::flag_set::FlagSet;
use crate::value::Target;

/// Separator placed between a prefix and a field's local name.
pub const SEPARATOR: char = '-';

/// What the binder does when it meets a field of an unsupported type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnsupportedPolicy {
    /// Skip the field and carry on with its siblings.
    #[default]
    Skip,
    /// Stop binding the remaining fields of the record that contains the
    /// field. Enclosing records carry on with their own siblings.
    Stop,
}

/// Joins `prefix` and `name` with [`SEPARATOR`], or returns `name` alone
/// when the prefix is empty.
///
/// # Examples
///
/// ```
/// use struct_flag::compose_name;
///
/// assert_eq!(compose_name("", "port"), "port");
/// assert_eq!(compose_name("db", "port"), "db-port");
/// ```
#[must_use]
pub fn compose_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}{SEPARATOR}{name}")
    }
}

/// Binds records to flag sets.
///
/// [`bind`](crate::bind) and [`bind_to`](crate::bind_to) use the default
/// binder; construct one explicitly to change the [`UnsupportedPolicy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Binder {
    unsupported: UnsupportedPolicy,
}

impl Binder {
    /// Creates a binder with the default policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unsupported: UnsupportedPolicy::Skip,
        }
    }

    /// Sets the policy for fields of unsupported types.
    #[must_use]
    pub const fn with_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }

    /// The policy for fields of unsupported types.
    #[must_use]
    pub const fn unsupported(&self) -> UnsupportedPolicy {
        self.unsupported
    }

    /// Binds `record` to a new flag set named after the running program,
    /// with no prefix.
    #[must_use]
    pub fn bind<'a, T: Flags>(&self, record: &'a mut T) -> FlagSet<'a> {
        let mut flags = FlagSet::command_line();
        self.bind_to(&mut flags, "", record);
        flags
    }

    /// Registers a flag on `flags` for every eligible field of `record`.
    ///
    /// Flag names are prefixed with `prefix` and [`SEPARATOR`] unless the
    /// prefix is empty.
    pub fn bind_to<'a, T: Flags>(&self, flags: &mut FlagSet<'a>, prefix: &str, record: &'a mut T) {
        self.walk(flags, prefix, record);
    }

    /// Binds a dynamically classified value, which must be a record.
    ///
    /// # Panics
    ///
    /// Panics when `value` is not [`FieldValue::Record`]. Binding a leaf or an
    /// unsupported value is a programming error.
    pub fn bind_value<'a>(&self, flags: &mut FlagSet<'a>, prefix: &str, value: FieldValue<'a>) {
        match value {
            FieldValue::Record(record) => self.walk(flags, prefix, record),
            other => panic!(
                "struct_flag: bind target must be a record, got {}",
                other.describe()
            ),
        }
    }

    fn walk<'a>(&self, flags: &mut FlagSet<'a>, prefix: &str, record: &'a mut dyn Flags) {
        for field in record.fields() {
            let declared = field.name();
            if !field.is_exported() {
                trace!(field = declared, "skipping private field");
                continue;
            }
            let tags = *field.tags();
            if tags.is_suppressed() {
                trace!(field = declared, "skipping suppressed field");
                continue;
            }
            let local = tags.flag.filter(|name| !name.is_empty()).unwrap_or(declared);
            let name = compose_name(prefix, local);

            match field.into_value() {
                FieldValue::Record(nested) => {
                    trace!(prefix = %name, "binding nested record");
                    self.walk(flags, &name, nested);
                }
                FieldValue::Leaf(target) => register_leaf(flags, &name, &tags, target),
                FieldValue::Unsupported(type_name) => match self.unsupported {
                    UnsupportedPolicy::Skip => {
                        debug!(field = declared, type_name, "skipping unsupported field");
                    }
                    UnsupportedPolicy::Stop => {
                        debug!(
                            field = declared,
                            type_name, "unsupported field stops the remaining siblings"
                        );
                        return;
                    }
                },
            }
        }
    }
}

fn register_leaf<'a>(flags: &mut FlagSet<'a>, name: &str, tags: &Tags, target: Target<'a>) {
    let default = tags.default.map_or_else(
        || target.get(),
        |text| target.kind().decode_default(text),
    );
    let usage = tags.usage.unwrap_or_default();
    let slot = flags.slot(target);
    if let Some(alias) = tags
        .short
        .map(|alias| alias.trim_start_matches('-'))
        .filter(|alias| !alias.is_empty())
    {
        flags.var(slot, name, default.clone(), usage);
        flags.var(slot, alias, default, usage);
    } else {
        flags.var(slot, name, default, usage);
    }
}

/// Binds `record` to a new flag set named after the running program, using
/// the default [`Binder`].
///
/// # Examples
///
/// ```
/// use struct_flag::Flags;
///
/// #[derive(Flags)]
/// struct Config {
///     pub verbose: bool,
/// }
///
/// let mut config = Config { verbose: false };
/// let flags = struct_flag::bind(&mut config);
/// assert!(flags.lookup("verbose").is_some());
/// ```
#[must_use]
pub fn bind<T: Flags>(record: &mut T) -> FlagSet<'_> {
    Binder::new().bind(record)
}

/// Registers a flag on `flags` for every eligible field of `record`, using the
/// default [`Binder`].
///
/// # Examples
///
/// ```
/// use struct_flag::{FlagSet, Flags, bind_to};
///
/// #[derive(Flags)]
/// struct Database {
///     #[flag(usage = "connection string")]
///     pub url: String,
/// }
///
/// let mut db = Database { url: String::from("postgres://localhost") };
/// let mut flags = FlagSet::new("app");
/// bind_to(&mut flags, "db", &mut db);
/// flags.parse_from(["app", "--db-url", "postgres://prod"])?;
/// drop(flags);
/// assert_eq!(db.url, "postgres://prod");
/// # Ok::<(), struct_flag::FlagError>(())
/// ```
pub fn bind_to<'a, T: Flags>(flags: &mut FlagSet<'a>, prefix: &str, record: &'a mut T) {
    Binder::new().bind_to(flags, prefix, record);
}
