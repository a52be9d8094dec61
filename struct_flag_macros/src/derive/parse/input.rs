//! Input parsing for the `Flags` derive macro.
//!
//! This module gathers the struct identifier, generics, fields and all
//! attribute metadata in one pass so macro expansion can fail fast with
//! useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Visibility};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// One named field of the input struct.
#[derive(Clone)]
pub(crate) struct FieldSpec {
    pub ident: Ident,
    /// Declared name after any `rename_all` rule.
    pub name: String,
    pub ty: Type,
    pub exported: bool,
    pub attrs: FieldAttrs,
}

impl FieldSpec {
    /// Returns `true` when generated code must call into the field's
    /// `FlagField` implementation.
    pub(crate) fn needs_accessor(&self) -> bool {
        self.exported && !self.attrs.is_suppressed() && !super::is_unsupported(&self.ty)
    }
}

/// Everything the generator needs from the derive input.
pub(crate) struct ParsedInput {
    pub ident: Ident,
    pub generics: Generics,
    pub fields: Vec<FieldSpec>,
    pub struct_attrs: StructAttrs,
}

/// Gathers information from the user-provided struct.
///
/// Only structs with named fields are accepted; enums, unions, tuple structs
/// and unit structs are rejected with a spanned error.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let ident = input.ident.clone();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Flags requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Flags can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "unnamed fields are not supported"));
        };
        let declared = field_ident.unraw().to_string();
        let name = struct_attrs
            .rename_all
            .map_or_else(|| declared.clone(), |rule| rule.apply(&declared));
        fields.push(FieldSpec {
            ident: field_ident,
            name,
            ty: field.ty.clone(),
            exported: matches!(field.vis, Visibility::Public(_)),
            attrs: parse_field_attrs(&field.attrs)?,
        });
    }

    Ok(ParsedInput {
        ident,
        generics: input.generics.clone(),
        fields,
        struct_attrs,
    })
}
