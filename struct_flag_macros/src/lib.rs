//! Procedural macros for `struct_flag`.
//!
//! `#[derive(Flags)]` generates the descriptor table the binder walks: one
//! entry per named field, in declaration order, carrying the field's declared
//! name, its visibility, the tags from `#[flag(...)]`, and a typed mutable
//! accessor. Fields of collection or pointer types are described as
//! unsupported so the binder can apply its policy to them.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;


/// Derive macro for `struct_flag::Flags`.
///
/// Field attributes, written `#[flag(...)]`:
///
/// - `name = "..."` renames the flag; `name = "-"` or `skip` leaves the field
///   out.
/// - `usage = "..."` sets the help text.
/// - `default = ...` sets the default, as text or a literal.
/// - `short = "..."` (or a char) registers an alias.
///
/// Struct attributes: `crate = "..."` overrides the runtime crate path and
/// `rename_all = "..."` applies a case rule to declared field names.
#[proc_macro_derive(Flags, attributes(flag))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
