//! Example service launcher whose settings come from command-line flags.
//!
//! ```text
//! serve_ctl -a 0.0.0.0:80 --limits-conns 512 --timeout 1m30s start
//! ```

use std::io::{self, Write};
use std::time::Duration;

use struct_flag::{Binder, FlagError, FlagSet, Flags, UnsupportedPolicy};

/// Settings for the service.
#[derive(Debug, Flags)]
pub struct ServeArgs {
    #[flag(name = "addr", short = 'a', usage = "address to listen on")]
    /// Address to listen on.
    pub address: String,
    #[flag(default = "15s", usage = "time allowed for each request")]
    /// Time allowed for each request.
    pub timeout: Duration,
    #[flag(short = 'v', usage = "log every request")]
    /// Log every request.
    pub verbose: bool,
    /// Connection limits.
    pub limits: Limits,
    #[flag(skip)]
    /// Message of the day.
    pub motd: String,
}

/// Connection limits, exposed as `--limits-*` flags.
#[derive(Debug, Flags)]
pub struct Limits {
    #[flag(name = "conns", usage = "maximum concurrent connections")]
    /// Maximum concurrent connections.
    pub max_conns: u64,
    #[flag(default = 4, usage = "worker threads")]
    /// Worker threads.
    pub workers: usize,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            address: String::from("127.0.0.1:8080"),
            timeout: Duration::ZERO,
            verbose: false,
            limits: Limits {
                max_conns: 256,
                workers: 0,
            },
            motd: String::from("hello"),
        }
    }
}

/// Binds `args` to a fresh flag set and parses `argv` into it, returning the
/// positional arguments.
///
/// # Errors
///
/// Returns the parse failure, help requests included.
pub fn load<I, T>(args: &mut ServeArgs, argv: I) -> Result<Vec<String>, FlagError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut flags = FlagSet::new("serve_ctl").about("Start the example service.");
    Binder::new()
        .with_unsupported(UnsupportedPolicy::Skip)
        .bind_to(&mut flags, "", args);
    flags.parse_from(argv)
}

fn report(out: &mut impl Write, args: &ServeArgs, rest: &[String]) -> io::Result<()> {
    writeln!(out, "listening on {}", args.address)?;
    writeln!(
        out,
        "timeout {}, {} workers, {} connections",
        struct_flag::duration::format(args.timeout),
        args.limits.workers,
        args.limits.max_conns
    )?;
    if args.verbose {
        writeln!(out, "request logging enabled ({})", args.motd)?;
    }
    if !rest.is_empty() {
        writeln!(out, "commands: {}", rest.join(" "))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut args = ServeArgs::default();
    let rest = match load(&mut args, std::env::args_os()) {
        Ok(rest) => rest,
        Err(FlagError::Cli(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&mut out, &args, &rest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn flags_override_defaults() -> anyhow::Result<()> {
        let mut args = ServeArgs::default();
        let rest = load(
            &mut args,
            ["serve_ctl", "-a", "0.0.0.0:80", "--limits-conns", "512", "start"],
        )?;
        assert_eq!(rest, ["start"]);
        assert_eq!(args.address, "0.0.0.0:80");
        assert_eq!(args.limits.max_conns, 512);
        assert_eq!(args.limits.workers, 4);
        assert_eq!(args.timeout, Duration::from_secs(15));

        let mut out = Vec::new();
        report(&mut out, &args, &rest)?;
        let text = String::from_utf8(out)?;
        assert!(text.contains("timeout 15s, 4 workers, 512 connections"));
        Ok(())
    }

    #[rstest]
    fn help_is_reported_as_a_display_request() {
        let mut args = ServeArgs::default();
        let err = load(&mut args, ["serve_ctl", "--help"]).err();
        assert!(err.is_some_and(|err| err.is_display_request()));
    }
}
