//! Trybuild fixture verifying `#[flag(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use struct_flag as my_flags;
use my_flags::{FlagSet, Flags};

/// Generated code must reach the runtime through `my_flags::`.
#[derive(Flags)]
#[flag(crate = "my_flags")]
struct AliasedConfig {
    #[flag(usage = "greeting")]
    pub value: String,
    pub count: u64,
}

fn main() {
    let mut config = AliasedConfig {
        value: String::from("hello"),
        count: 1,
    };
    let mut flags = FlagSet::new("alias");
    my_flags::bind_to(&mut flags, "", &mut config);
    let _: my_flags::FlagResult<Vec<String>> = flags.parse_from(["alias", "--count", "2"]);
}
