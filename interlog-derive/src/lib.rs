//! Derive macros for `interlog`.
//!
//! This crate generates the `LogState` and `LogStateType` implementations
//! behind `#[derive(LogState)]`. It:
//! - reads container-level `#[log_state(...)]` attributes
//! - emits the discriminator, the textual form and the default check
//!
//! It does **not** define warning behaviors or policy tables. Those live in
//! the main `interlog` crate and are consulted at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, LitStr, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_default_bounds;

/// Derives `interlog::LogState` and `interlog::LogStateType` for structs and enums.
///
/// The discriminator used for warning-policy lookup is the type's identifier
/// unless overridden with `#[log_state(name = "...")]`.
///
/// # Textual form
///
/// - **Enums**: each variant writes its own identifier, whatever fields it
///   carries. A `CoreEventId::SensitiveDataLoggingEnabledWarning` value has the
///   qualified identity `CoreEventId.SensitiveDataLoggingEnabledWarning`.
/// - **Structs**: the text is taken from the type's `Display` implementation,
///   which the caller must provide.
///
/// # Container Attributes
///
/// - `#[log_state(name = "Discriminator")]` - Use a custom discriminator.
/// - `#[log_state(default)]` - Treat values equal to `Default::default()` as
///   default state, which bypasses warning policy. Requires `PartialEq + Default`.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(LogState, attributes(log_state))]
pub fn derive_log_state(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the interlog crate root.
///
/// Handles crate renaming (e.g., `my_log = { package = "interlog", ... }`).
/// Inside the interlog package itself (the library and its integration tests)
/// this resolves to `::interlog`, which the library aliases with
/// `extern crate self as interlog`.
fn crate_root() -> TokenStream {
    match crate_name("interlog") {
        Ok(FoundCrate::Itself) => quote! { ::interlog },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::interlog },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions {
        name,
        default_check,
    } = parse_container_options(&attrs)?;

    let crate_root = crate_root();
    let discriminator = name.unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));

    let write_body = match &data {
        Data::Struct(_) => derive_struct(),
        Data::Enum(data) => derive_enum(&ident, data),
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`LogState` cannot be derived for unions",
            ));
        }
    };

    let is_default_fn = if default_check {
        quote! {
            fn is_default(&self) -> bool {
                *self == <Self as ::core::default::Default>::default()
            }
        }
    } else {
        quote! {}
    };

    let state_generics = if default_check {
        add_default_bounds(&ident, generics.clone())
    } else {
        generics.clone()
    };
    let (impl_generics, ty_generics, where_clause) = state_generics.split_for_impl();
    let (type_impl_generics, type_ty_generics, type_where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #type_impl_generics #crate_root::LogStateType for #ident #type_ty_generics #type_where_clause {
            const NAME: &'static str = #discriminator;
        }

        impl #impl_generics #crate_root::LogState for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #discriminator
            }

            fn write_state(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #write_body
            }

            #is_default_fn
        }
    })
}
