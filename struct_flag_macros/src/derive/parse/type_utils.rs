//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to spot
//! field types the binder cannot handle: collections, smart pointers,
//! references and other compound types.

use quote::ToTokens;
use syn::{PathArguments, Type};

/// Generic wrappers whose fields are described as unsupported.
const UNSUPPORTED_WRAPPERS: &[&str] = &[
    "Option",
    "Vec",
    "VecDeque",
    "LinkedList",
    "BinaryHeap",
    "HashMap",
    "BTreeMap",
    "HashSet",
    "BTreeSet",
    "Box",
    "Rc",
    "Arc",
    "Cell",
    "RefCell",
];

/// Returns the final path segment's name if `ty` is a generic path such as
/// `Vec<T>` or `std::collections::HashMap<K, V>`.
///
/// The check is shallow: only the outermost path is inspected, so
/// crate-relative and fully-qualified forms match alike.
fn generic_wrapper(ty: &Type) -> Option<String> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    let last = p.path.segments.last()?;
    let PathArguments::AngleBracketed(_) = last.arguments else {
        return None;
    };
    Some(last.ident.to_string())
}

/// Returns `true` if `ty` can never be bound as a leaf flag or nested record.
pub(crate) fn is_unsupported(ty: &Type) -> bool {
    match ty {
        Type::Path(_) => generic_wrapper(ty)
            .is_some_and(|name| UNSUPPORTED_WRAPPERS.contains(&name.as_str())),
        Type::Paren(inner) => is_unsupported(&inner.elem),
        Type::Group(inner) => is_unsupported(&inner.elem),
        Type::Reference(_)
        | Type::Ptr(_)
        | Type::Array(_)
        | Type::Slice(_)
        | Type::Tuple(_)
        | Type::BareFn(_)
        | Type::TraitObject(_)
        | Type::ImplTrait(_)
        | Type::Never(_) => true,
        _ => false,
    }
}

/// Renders `ty` compactly for diagnostics, e.g. `HashMap<String, u8>`.
pub(crate) fn type_label(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}
