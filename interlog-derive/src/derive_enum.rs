//! Enum-specific `LogState` derivation.
//!
//! Every variant writes its own identifier; fields are never formatted.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{DataEnum, Fields};

pub(crate) fn derive_enum(name: &Ident, data: &DataEnum) -> TokenStream {
    let arms = data.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let pattern = match &variant.fields {
            Fields::Unit => quote! { #name::#variant_ident },
            Fields::Named(_) => quote! { #name::#variant_ident { .. } },
            Fields::Unnamed(_) => quote! { #name::#variant_ident(..) },
        };
        quote! {
            #pattern => f.write_str(stringify!(#variant_ident))
        }
    });

    if data.variants.is_empty() {
        // Uninhabited: no value can reach this body.
        return quote! { match *self {} };
    }

    quote! {
        match self {
            #(#arms),*
        }
    }
}
