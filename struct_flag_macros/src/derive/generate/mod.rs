//! `Flags` trait implementation generation.
//!
//! Each field becomes one `Field` builder expression. Fields the binder will
//! never read (private, suppressed or of an unsupported type) carry an
//! `Unsupported` placeholder, so their types need no `FlagField` impl.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{LitStr, parse_quote};

use super::parse::{FieldSpec, ParsedInput, type_label};

fn string_lit(value: &str) -> LitStr {
    LitStr::new(value, proc_macro2::Span::call_site())
}

/// Generate the descriptor entry for a single field.
pub(crate) fn field_entry(field: &FieldSpec, krate: &TokenStream) -> TokenStream {
    let name = string_lit(&field.name);
    let value = if field.needs_accessor() {
        let ident = &field.ident;
        quote! { #krate::FlagField::field_value(&mut self.#ident) }
    } else {
        let label = string_lit(&type_label(&field.ty));
        quote! { #krate::FieldValue::Unsupported(#label) }
    };

    let mut entry = quote! { #krate::Field::new(#name, #value) };
    if !field.exported {
        entry = quote! { #entry.private() };
    }
    if let Some(flag) = field.attrs.flag_tag() {
        let flag = string_lit(flag);
        entry = quote! { #entry.flag(#flag) };
    }
    if let Some(usage) = &field.attrs.usage {
        let usage = string_lit(usage);
        entry = quote! { #entry.usage(#usage) };
    }
    if let Some(default) = &field.attrs.default {
        let default = string_lit(default);
        entry = quote! { #entry.default_value(#default) };
    }
    if let Some(short) = &field.attrs.short {
        let short = string_lit(short);
        entry = quote! { #entry.short(#short) };
    }
    entry
}

/// Generate the `Flags` implementation for the parsed struct.
pub(crate) fn generate_flags_impl(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in input.fields.iter().filter(|field| field.needs_accessor()) {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote! { #ty: #krate::FlagField });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let entries = input.fields.iter().map(|field| field_entry(field, krate));

    quote! {
        impl #impl_generics #krate::Flags for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<#krate::Field<'_>> {
                ::std::vec![ #( #entries ),* ]
            }
        }
    }
}
