//! Tests for derive input collection.

use super::super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn parse(input: &DeriveInput) -> Result<ParsedInput> {
    parse_input(input).map_err(|err| anyhow!(err))
}

#[rstest]
fn collects_fields_in_declaration_order() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Server {
            #[flag(name = "addr")]
            pub address: String,
            pub limits: Limits,
            secret: String,
            pub peers: Vec<String>,
            #[flag(skip)]
            pub cache: Cache,
        }
    };
    let parsed = parse(&input)?;
    let names: Vec<&str> = parsed.fields.iter().map(|f| f.name.as_str()).collect();
    ensure!(
        names == ["address", "limits", "secret", "peers", "cache"],
        "unexpected order: {names:?}"
    );
    let accessors: Vec<bool> = parsed.fields.iter().map(FieldSpec::needs_accessor).collect();
    ensure!(
        accessors == [true, true, false, false, false],
        "unexpected accessor plan: {accessors:?}"
    );
    let exported: Vec<bool> = parsed.fields.iter().map(|f| f.exported).collect();
    ensure!(
        exported == [true, true, false, true, true],
        "unexpected visibility: {exported:?}"
    );
    Ok(())
}

#[rstest]
fn restricted_visibility_is_not_exported() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Config {
            pub(crate) port: u64,
        }
    };
    let parsed = parse(&input)?;
    let field = parsed
        .fields
        .first()
        .ok_or_else(|| anyhow!("missing field"))?;
    ensure!(!field.exported, "pub(crate) fields are not exported");
    Ok(())
}

#[rstest]
fn rename_all_applies_to_unraw_names() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[flag(rename_all = "kebab-case")]
        struct Config {
            pub max_conns: u64,
            pub r#type: String,
        }
    };
    let parsed = parse(&input)?;
    let names: Vec<&str> = parsed.fields.iter().map(|f| f.name.as_str()).collect();
    ensure!(names == ["max-conns", "type"], "unexpected names: {names:?}");
    Ok(())
}

#[rstest]
#[case::tuple(parse_quote! { struct Port(pub u16); }, "Flags requires named fields")]
#[case::unit(parse_quote! { struct Marker; }, "Flags requires named fields")]
#[case::enumeration(parse_quote! { enum Mode { Fast, Slow } }, "Flags can only be derived for structs")]
fn rejects_inputs_without_named_fields(
    #[case] input: DeriveInput,
    #[case] expected: &str,
) -> Result<()> {
    let Err(err) = parse_input(&input) else {
        return Err(anyhow!("expected an error for non-record input"));
    };
    ensure!(err.to_string() == expected, "unexpected error: {err}");
    Ok(())
}
