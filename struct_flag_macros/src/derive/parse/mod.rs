//! Parsing utilities for the `Flags` derive macro.
//!
//! Struct- and field-level `#[flag(...)]` attributes are read once into
//! [`StructAttrs`] and [`FieldAttrs`]; unknown keys are rejected so typos
//! surface at compile time rather than as silently missing tags.

use syn::Attribute;
use syn::meta::ParseNestedMeta;

mod input;
mod literals;
mod rename;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{FieldSpec, ParsedInput, parse_input};
use literals::{lit_str, lit_str_or_char, lit_text};
pub(crate) use rename::RenameAll;
pub(crate) use type_utils::{is_unsupported, type_label};

/// Struct-level attributes recognised by `#[derive(Flags)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[flag(crate = "my_alias")]`, generated code references
    /// types through `my_alias::` instead of `struct_flag::`.
    pub crate_path: Option<syn::Path>,
    /// Case rule applied to declared field names.
    pub rename_all: Option<RenameAll>,
}

/// Field-level attributes recognised by `#[derive(Flags)]`.
///
/// Each maps onto one tag of the runtime descriptor: `name` becomes the
/// `flag` tag, `usage`, `default` and `short` keep their names. `skip` is
/// shorthand for `name = "-"`.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    pub name: Option<String>,
    pub skip: bool,
    pub usage: Option<String>,
    pub default: Option<String>,
    pub short: Option<String>,
}

impl FieldAttrs {
    /// Returns `true` when the field is excluded from binding.
    pub(crate) fn is_suppressed(&self) -> bool {
        self.skip || self.name.as_deref() == Some("-")
    }

    /// Value emitted for the `flag` tag, if any.
    pub(crate) fn flag_tag(&self) -> Option<&str> {
        if self.skip {
            Some("-")
        } else {
            self.name.as_deref()
        }
    }
}

/// Iterate all `#[flag(...)]` attributes once and apply a callback.
fn parse_flag_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta, expected: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string);
    meta.error(format!(
        "unknown flag attribute `{key}`; expected one of {expected}"
    ))
}

/// Rejects names the runtime registry would refuse.
fn validate_name(value: &str, key: &str, span: proc_macro2::Span) -> syn::Result<()> {
    let problem = if value.contains('=') {
        Some("must not contain `=`")
    } else if value.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    };
    problem.map_or(Ok(()), |problem| {
        Err(syn::Error::new(span, format!("flag `{key}` {problem}")))
    })
}

/// Extracts `#[flag(...)]` metadata applied to a struct.
///
/// Recognised keys are `crate` and `rename_all`.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_flag_attrs(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            Some("rename_all") => {
                let s = lit_str(meta, "rename_all")?;
                out.rename_all = Some(RenameAll::parse(&s)?);
                Ok(())
            }
            _ => Err(unknown_key(meta, "`crate` or `rename_all`")),
        }
    })?;
    Ok(out)
}

/// Applies one field attribute key to `out`.
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<()> {
    match meta.path.get_ident().map(ToString::to_string).as_deref() {
        Some("name") => {
            let s = lit_str(meta, "name")?;
            let value = s.value();
            if value != "-" {
                if value.starts_with('-') {
                    return Err(syn::Error::new(
                        s.span(),
                        "flag `name` must not begin with `-`; use `skip` to suppress the field",
                    ));
                }
                validate_name(&value, "name", s.span())?;
            }
            out.name = Some(value);
        }
        Some("skip") => out.skip = true,
        Some("usage") => out.usage = Some(lit_str(meta, "usage")?.value()),
        Some("default") => out.default = Some(lit_text(meta, "default")?),
        Some("short") => {
            let (value, span) = lit_str_or_char(meta, "short")?;
            validate_name(&value, "short", span)?;
            out.short = Some(value);
        }
        _ => {
            return Err(unknown_key(
                meta,
                "`name`, `skip`, `usage`, `default`, or `short`",
            ));
        }
    }
    Ok(())
}

/// Parses field-level `#[flag(...)]` attributes.
///
/// Recognised keys are `name`, `skip`, `usage`, `default` and `short`.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_flag_attrs(attrs, |meta| apply_field_attr(meta, &mut out))?;
    Ok(out)
}
