//! Trybuild fixture verifying generic records bind through `FlagField`
//! bounds on their type parameters.

use std::time::Duration;

use struct_flag::{FlagSet, Flags, bind_to};

#[derive(Flags)]
struct Backend {
    pub url: String,
}

/// Only `inner` is bounded; the `Vec<T>` field is described as unsupported.
#[derive(Flags)]
struct Pool<T> {
    pub inner: T,
    pub replicas: Vec<T>,
    pub idle: Duration,
}

fn main() {
    let mut pool = Pool {
        inner: Backend {
            url: String::from("postgres://localhost"),
        },
        replicas: Vec::new(),
        idle: Duration::from_secs(60),
    };
    let mut flags = FlagSet::new("pool");
    bind_to(&mut flags, "db", &mut pool);
    assert!(flags.lookup("db-inner-url").is_some());

    let mut leaf_pool = Pool {
        inner: 5_u64,
        replicas: vec![1, 2],
        idle: Duration::ZERO,
    };
    let mut leaf_flags = FlagSet::new("pool");
    bind_to(&mut leaf_flags, "", &mut leaf_pool);
    assert!(leaf_flags.lookup("inner").is_some());
}
