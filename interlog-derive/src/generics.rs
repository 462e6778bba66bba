//! Trait bound management for generic state types.

use proc_macro2::Ident;
use syn::parse_quote;

/// Adds `PartialEq + Default` bounds on `Self` for `#[log_state(default)]`.
///
/// The bound is placed on the full self type rather than on each parameter,
/// so `PhantomData<T>` and similar fields do not force bounds on `T`.
pub(crate) fn add_default_bounds(ident: &Ident, mut generics: syn::Generics) -> syn::Generics {
    let (_, ty_generics, _) = generics.split_for_impl();
    let self_ty: syn::Type = parse_quote!(#ident #ty_generics);
    let where_clause = generics.make_where_clause();
    where_clause
        .predicates
        .push(parse_quote!(#self_ty: ::core::cmp::PartialEq + ::core::default::Default));
    generics
}
