//! Translation between registered flags and `clap` arguments.

use clap::{Arg, ArgAction, ArgMatches, Command};

use super::{Flag, FlagSet, SlotId};
use crate::value::{FlagValue, Kind};

/// Argument id collecting positional arguments.
const POSITIONAL_ID: &str = "struct_flag::positional";

const HELP_NAME: &str = "help";

fn help_text(flag: &Flag) -> String {
    let default = flag.default_value();
    if default.is_zero() {
        return flag.usage().to_owned();
    }
    let shown = match default {
        FlagValue::Str(text) => format!("{text:?}"),
        other => other.to_string(),
    };
    if flag.usage().is_empty() {
        format!("(default {shown})")
    } else {
        format!("{} (default {shown})", flag.usage())
    }
}

fn flag_arg(flag: &Flag) -> Arg {
    let kind = flag.kind();
    let mut arg = Arg::new(flag.name().to_owned())
        .long(flag.name().to_owned())
        .action(ArgAction::Append)
        .value_name(kind.value_name())
        .value_parser(move |text: &str| kind.parse(text))
        .help(help_text(flag));

    let mut chars = flag.name().chars();
    if let (Some(short), None) = (chars.next(), chars.next()) {
        arg = arg.short(short);
    }

    if kind == Kind::Bool {
        arg.num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
    } else {
        arg.num_args(1).allow_hyphen_values(true)
    }
}

pub(super) fn build(set: &FlagSet<'_>) -> Command {
    let mut command = Command::new(set.name.clone())
        .disable_help_flag(true)
        .disable_version_flag(true);
    if let Some(about) = &set.about {
        command = command.about(about.clone());
    }
    for flag in &set.flags {
        command = command.arg(flag_arg(flag));
    }

    if set.lookup(HELP_NAME).is_none() {
        let mut help = Arg::new(HELP_NAME)
            .long(HELP_NAME)
            .action(ArgAction::Help)
            .help("Print help");
        if set.lookup("h").is_none() {
            help = help.short('h');
        }
        command = command.arg(help);
    }

    command.arg(
        Arg::new(POSITIONAL_ID)
            .value_name("ARGS")
            .value_parser(clap::value_parser!(String))
            .num_args(1..)
            .trailing_var_arg(true)
            .action(ArgAction::Append),
    )
}

/// Extracts parsed flag values in command-line order, paired with their
/// slots, plus the positional arguments.
pub(super) fn collect(
    set: &FlagSet<'_>,
    matches: &ArgMatches,
) -> (Vec<(SlotId, FlagValue)>, Vec<String>) {
    let mut updates: Vec<(usize, SlotId, FlagValue)> = Vec::new();
    for flag in &set.flags {
        let (Some(values), Some(indices)) = (
            matches.get_many::<FlagValue>(flag.name()),
            matches.indices_of(flag.name()),
        ) else {
            continue;
        };
        updates.extend(
            indices
                .zip(values.cloned())
                .map(|(index, value)| (index, flag.slot(), value)),
        );
    }
    updates.sort_by_key(|(index, ..)| *index);

    let positionals = matches
        .get_many::<String>(POSITIONAL_ID)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    (
        updates
            .into_iter()
            .map(|(_, slot, value)| (slot, value))
            .collect(),
        positionals,
    )
}
