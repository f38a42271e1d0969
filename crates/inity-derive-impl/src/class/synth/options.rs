// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Keyword options and factory defaults.
//!
//! Keyword parameters are gathered in `{Class}Options`, whose `Default`
//! implementation holds the resolved defaults:
//!
//! | Default | Expression in `Default::default` |
//! |---------|----------------------------------|
//! | string literal | `Into::into("...")` |
//! | other value | the expression, evaluated on every call |
//! | factory | clone of the materialized value |
//! | property | `Default::default()` |
//!
//! Factory defaults of a class are produced together, once, the first time
//! a default is needed, and cached in a hidden `static`:
//!
//! ```rust,ignore
//! fn __inity_defaults() -> &'static (Vec<String>, HashMap<String, i64>) {
//!     static DEFAULTS: OnceLock<(Vec<String>, HashMap<String, i64>)> = OnceLock::new();
//!     ::inity::__private::materialize(&DEFAULTS, "Defaults", 2, || (
//!         DefaultFactory::<Vec<String>>::produce(&(Vec::new)),
//!         DefaultFactory::<HashMap<String, i64>>::produce(&(factory(HashMap::new))),
//!     ))
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::Index;

use super::signature::Signature;
use crate::class::{
    descriptor::{FieldDescriptor, ResolvedDefault, is_str_literal},
    parse::ClassDef
};

/// Generate `{Class}Options` and its `Default` implementation.
///
/// Returns an empty `TokenStream` when the class has no keyword parameters.
#[must_use]
pub fn generate(class: &ClassDef, signature: &Signature<'_>) -> TokenStream {
    if signature.keyword().is_empty() {
        return TokenStream::new();
    }

    let ident = &class.ident;
    let vis = &class.vis;
    let options_ident = class.options_ident();
    let doc = format!("Keyword fields of [`{ident}::new_with`], holding their defaults.");

    let fields = signature.keyword().iter().map(|field| {
        let field_ident = &field.ident;
        let field_vis = &field.vis;
        let ty = &field.value_ty;
        let docs = field.attrs.iter().filter(|attr| attr.path().is_ident("doc"));
        quote! {
            #(#docs)*
            #field_vis #field_ident: #ty
        }
    });

    let mut factory_index = 0;
    let defaults = signature.keyword().iter().map(|field| {
        let field_ident = &field.ident;
        let value = default_expr(class, field, &mut factory_index);
        quote! { #field_ident: #value }
    });

    quote! {
        #[doc = #doc]
        #vis struct #options_ident {
            #(#fields),*
        }

        impl ::core::default::Default for #options_ident {
            fn default() -> Self {
                Self {
                    #(#defaults),*
                }
            }
        }
    }
}

fn default_expr(class: &ClassDef, field: &FieldDescriptor, factory_index: &mut usize) -> TokenStream {
    match &field.default {
        ResolvedDefault::Value(expr) if is_str_literal(expr) => {
            quote! { ::core::convert::Into::into(#expr) }
        }
        ResolvedDefault::Value(expr) => quote! { #expr },
        ResolvedDefault::Factory(_) => {
            let ident = &class.ident;
            let index = Index::from(*factory_index);
            *factory_index += 1;
            quote! { ::core::clone::Clone::clone(&#ident::__inity_defaults().#index) }
        }
        ResolvedDefault::Property | ResolvedDefault::Missing => {
            quote! { ::core::default::Default::default() }
        }
    }
}

/// Generate the hidden accessor of the materialized factory defaults.
///
/// Returns an empty `TokenStream` when no keyword parameter has a factory
/// default.
#[must_use]
pub fn defaults_cell(class: &ClassDef, signature: &Signature<'_>) -> TokenStream {
    let factories: Vec<_> = signature.factories().collect();
    if factories.is_empty() {
        return TokenStream::new();
    }

    let name = class.ident.to_string();
    let count = factories.len();
    let types: Vec<_> = factories.iter().map(|field| &field.value_ty).collect();
    let produced = factories.iter().map(|field| {
        let ty = &field.value_ty;
        match &field.default {
            ResolvedDefault::Factory(expr) => {
                quote! { ::inity::DefaultFactory::<#ty>::produce(&(#expr)) }
            }
            _ => quote! { ::core::default::Default::default() }
        }
    });

    quote! {
        #[doc(hidden)]
        fn __inity_defaults() -> &'static (#(#types,)*) {
            static DEFAULTS: ::std::sync::OnceLock<(#(#types,)*)> = ::std::sync::OnceLock::new();
            ::inity::__private::materialize(&DEFAULTS, #name, #count, || (#(#produced,)*))
        }
    }
}
