//! Struct-specific `LogState` derivation.
//!
//! Structs carry arbitrary payloads, so their textual form is delegated to
//! the type's own `Display` implementation.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn derive_struct() -> TokenStream {
    quote! {
        ::core::fmt::Display::fmt(self, f)
    }
}
