//! Literal parsing helpers for derive attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

/// Parses a literal from a field attribute using `extractor`.
///
/// # Examples
///
/// ```ignore
/// # use syn::meta::ParseNestedMeta;
/// # use syn::{Lit, LitStr};
/// # fn demo(meta: &ParseNestedMeta) -> syn::Result<()> {
/// let s: LitStr = parse_lit(meta, "usage", |lit| match lit {
///     Lit::Str(s) => Some(s),
///     _ => None,
/// })?;
/// # Ok(())
/// # }
/// ```
fn parse_lit<T, F>(meta: &ParseNestedMeta, key: &str, expected: &str, extractor: F) -> syn::Result<T>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| syn::Error::new(span, format!("{key} must be a {expected}")))
}

/// Parses a string literal from a field attribute.
///
/// # Examples
///
/// ```rust,ignore
/// use syn::Attribute;
/// let attr: Attribute = syn::parse_quote!(#[flag(usage = "listen port")]);
/// attr.parse_nested_meta(|meta| {
///     let s = lit_str(&meta, "usage")?;
///     assert_eq!(s.value(), "listen port");
///     Ok(())
/// }).unwrap();
/// ```
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    parse_lit(meta, key, "string", |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}

/// Parses a string or character literal, returning its text and span.
pub(crate) fn lit_str_or_char(meta: &ParseNestedMeta, key: &str) -> syn::Result<(String, Span)> {
    parse_lit(meta, key, "string or char", |lit| match lit {
        Lit::Str(s) => Some((s.value(), s.span())),
        Lit::Char(c) => Some((c.value().to_string(), c.span())),
        _ => None,
    })
}

/// Renders a numeric or boolean literal as the text a `default` tag holds.
fn literal_text(lit: &Lit) -> Option<String> {
    match lit {
        Lit::Str(s) => Some(s.value()),
        Lit::Int(i) => Some(i.base10_digits().to_owned()),
        Lit::Float(f) => Some(f.base10_digits().to_owned()),
        Lit::Bool(b) => Some(b.value.to_string()),
        _ => None,
    }
}

/// Parses a `default` value: a string, integer, float or boolean literal,
/// optionally negated, returned as text.
pub(crate) fn lit_text(meta: &ParseNestedMeta, key: &str) -> syn::Result<String> {
    let expr = meta.value()?.parse::<Expr>()?;
    let text = match &expr {
        Expr::Lit(ExprLit { lit, .. }) => literal_text(lit),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: lit @ (Lit::Int(_) | Lit::Float(_)),
                ..
            }) => literal_text(lit).map(|digits| format!("-{digits}")),
            _ => None,
        },
        _ => None,
    };
    text.ok_or_else(|| {
        syn::Error::new_spanned(
            &expr,
            format!("{key} must be a string, integer, float or boolean literal"),
        )
    })
}
