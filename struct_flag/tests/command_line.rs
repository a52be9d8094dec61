//! Behavioural tests parsing command lines into bound records.

use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use struct_flag::{FlagError, FlagSet, Flags, RegistrationError, bind_to};

#[derive(Debug, Flags)]
struct Server {
    #[flag(name = "addr", usage = "listen address", short = "a")]
    pub address: String,
    #[flag(usage = "log every request")]
    pub verbose: bool,
    #[flag(default = "30s", usage = "request timeout")]
    pub timeout: Duration,
    pub workers: usize,
    pub limits: Limits,
}

#[derive(Debug, Flags)]
struct Limits {
    #[flag(name = "conns", usage = "connection ceiling")]
    pub max_conns: u64,
    pub offset: i64,
}

#[fixture]
fn server() -> Server {
    Server {
        address: String::from("127.0.0.1:8080"),
        verbose: false,
        timeout: Duration::ZERO,
        workers: 4,
        limits: Limits {
            max_conns: 64,
            offset: 0,
        },
    }
}

#[rstest]
fn parsed_values_land_in_the_record(mut server: Server) -> Result<()> {
    let mut flags = FlagSet::new("server");
    bind_to(&mut flags, "", &mut server);
    let rest = flags.parse_from([
        "server",
        "--addr",
        "0.0.0.0:80",
        "--limits-conns=512",
        "--limits-offset",
        "-3",
    ])?;
    drop(flags);

    ensure!(rest.is_empty(), "unexpected positionals: {rest:?}");
    ensure!(server.address == "0.0.0.0:80", "address not parsed");
    ensure!(server.limits.max_conns == 512, "conns not parsed");
    ensure!(server.limits.offset == -3, "negative value not parsed");
    ensure!(!server.verbose, "verbose should keep its default");
    ensure!(server.workers == 4, "workers should keep its default");
    ensure!(
        server.timeout == Duration::from_secs(30),
        "timeout should hold the tagged default"
    );
    Ok(())
}

#[rstest]
#[case::bare(&["server", "--verbose"], true)]
#[case::explicit_true(&["server", "--verbose=true"], true)]
#[case::numeric(&["server", "--verbose=1"], true)]
#[case::short_true(&["server", "--verbose=T"], true)]
#[case::explicit_false(&["server", "--verbose=false"], false)]
#[case::capitalised_false(&["server", "--verbose=False"], false)]
#[case::last_wins(&["server", "--verbose", "--verbose=0"], false)]
fn boolean_flags_accept_go_spellings(
    mut server: Server,
    #[case] args: &[&str],
    #[case] expected: bool,
) -> Result<()> {
    let mut flags = FlagSet::new("server");
    bind_to(&mut flags, "", &mut server);
    flags.parse_from(args)?;
    drop(flags);
    ensure!(server.verbose == expected, "verbose should be {expected}");
    Ok(())
}

#[rstest]
fn boolean_flags_do_not_consume_the_next_argument(mut server: Server) -> Result<()> {
    let mut flags = FlagSet::new("server");
    bind_to(&mut flags, "", &mut server);
    let rest = flags.parse_from(["server", "--verbose", "false"])?;
    drop(flags);
    ensure!(server.verbose, "bare boolean flag sets true");
    ensure!(rest == ["false"], "next argument should stay positional");
    Ok(())
}

#[rstest]
#[case::go_units("1h2m3.5s", Duration::from_millis(3_723_500))]
#[case::sub_second("250ms", Duration::from_millis(250))]
#[case::micro("1500us", Duration::from_micros(1500))]
#[case::zero("0", Duration::ZERO)]
fn duration_flags_accept_go_syntax(
    mut server: Server,
    #[case] text: &str,
    #[case] expected: Duration,
) -> Result<()> {
    let mut flags = FlagSet::new("server");
    bind_to(&mut flags, "", &mut server);
    flags.parse_from(["server", "--timeout", text])?;
    drop(flags);
    ensure!(
        server.timeout == expected,
        "expected {expected:?}, got {:?}",
        server.timeout
    );
    Ok(())
}

#[rstest]
#[case::hex("0x20", 32)]
#[case::octal("0o17", 15)]
#[case::binary("0b101", 5)]
#[case::separated("1_000", 1000)]
fn integer_flags_accept_prefixes(
    mut server: Server,
    #[case] text: &str,
    #[case] expected: usize,
) -> Result<()> {
    let mut flags = FlagSet::new("server");
    bind_to(&mut flags, "", &mut server);
    flags.parse_from(["server", "--workers", text])?;
    drop(flags);
    ensure!(server.workers == expected, "expected {expected}");
    Ok(())
}

#[rstest]
#[case::bad_integer(&["server", "--workers", "many"])]
#[case::negative_unsigned(&["server", "--limits-conns", "-1"])]
#[case::bad_duration(&["server", "--timeout", "soon"])]
#[case::bad_bool(&["server", "--verbose=maybe"])]
#[case::unknown_flag(&["server", "--nope"])]
#[case::missing_value(&["server", "--addr"])]
fn malformed_command_lines_are_rejected(mut server: Server, #[case] args: &[&str]) -> Result<()> {
    let mut flags = FlagSet::new("server");
    bind_to(&mut flags, "", &mut server);
    let Err(err) = flags.parse_from(args) else {
        return Err(anyhow!("{args:?} should be rejected"));
    };
    ensure!(
        matches!(err, FlagError::Cli(_)),
        "unexpected error variant: {err}"
    );
    ensure!(!err.is_display_request(), "parse failure is not a help request");
    Ok(())
}

#[rstest]
fn positionals_are_returned(mut server: Server) -> Result<()> {
    let mut flags = FlagSet::new("server");
    bind_to(&mut flags, "", &mut server);
    let rest = flags.parse_from(["server", "-a", ":9000", "serve", "--verbose"])?;
    drop(flags);
    ensure!(server.address == ":9000", "short alias not parsed");
    ensure!(!server.verbose, "flags after the first positional are not parsed");
    ensure!(rest == ["serve", "--verbose"], "unexpected positionals: {rest:?}");
    Ok(())
}

#[rstest]
fn help_is_a_display_request(mut server: Server) -> Result<()> {
    let mut flags = FlagSet::new("server").about("Serve requests.");
    bind_to(&mut flags, "", &mut server);
    let help = flags.command().render_help().to_string();
    for expected in [
        "--addr <STRING>",
        "listen address (default \"127.0.0.1:8080\")",
        "request timeout (default 30s)",
        "--limits-conns <UINT>",
        "connection ceiling (default 64)",
        "Serve requests.",
    ] {
        ensure!(help.contains(expected), "help lacks {expected:?}:\n{help}");
    }
    ensure!(
        !help.contains("(default false)"),
        "zero defaults are not shown:\n{help}"
    );

    let Err(err) = flags.parse_from(["server", "--help"]) else {
        return Err(anyhow!("--help should short-circuit parsing"));
    };
    ensure!(err.is_display_request(), "expected a help request, got {err}");
    Ok(())
}

#[derive(Flags)]
struct Clashing {
    pub port: u64,
    #[flag(name = "port")]
    pub backup_port: u64,
}

#[rstest]
fn duplicate_names_surface_on_parse() -> Result<()> {
    let mut record = Clashing {
        port: 1,
        backup_port: 2,
    };
    let mut flags = FlagSet::new("test");
    bind_to(&mut flags, "", &mut record);
    ensure!(flags.len() == 1, "second definition should be rejected");

    let Err(err) = flags.parse_from(["test"]) else {
        return Err(anyhow!("duplicate names should fail parsing"));
    };
    ensure!(
        matches!(
            &err,
            FlagError::Registration(RegistrationError::Redefined { name }) if name == "port"
        ),
        "unexpected error: {err}"
    );
    drop(flags);
    ensure!(record.backup_port == 2, "rejected flag must not touch storage");
    Ok(())
}

#[rstest]
fn records_bound_twice_under_one_prefix_clash() -> Result<()> {
    let mut first = Limits {
        max_conns: 1,
        offset: 0,
    };
    let mut second = Limits {
        max_conns: 2,
        offset: 0,
    };
    let mut flags = FlagSet::new("test");
    bind_to(&mut flags, "pool", &mut first);
    bind_to(&mut flags, "pool", &mut second);
    ensure!(
        flags.conflicts().len() == 2,
        "both names should conflict: {:?}",
        flags.conflicts()
    );
    ensure!(flags.parse_from(["test"]).is_err(), "parse should fail");
    Ok(())
}
