// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The rewritten struct.
//!
//! Only stored fields remain, in field-list order, so a subclass carries
//! the fields it inherits. Markers are gone: construction-only and
//! class-scoped fields are never stored, and a property field is stored
//! under its shadow name.
//!
//! ```rust,ignore
//! // declared                              // generated
//! pub struct Jim {                         pub struct Jim {
//!     pub a: i64,                              pub a: i64,
//!     #[field(property)]                       pub _will_shadow: i64
//!     pub will_shadow: i64,                }
//!     pub token: InitVar<String>
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use crate::class::{collector::FieldList, parse::ClassDef};

/// Generate the struct holding the stored fields of `class`.
#[must_use]
pub fn generate(class: &ClassDef, fields: &FieldList) -> TokenStream {
    let ClassDef {
        ident,
        vis,
        attrs,
        ..
    } = class;

    let stored = fields.stored().filter_map(|field| {
        let storage = field.storage_ident()?;
        let field_attrs = &field.attrs;
        let field_vis = &field.vis;
        let ty = &field.value_ty;
        Some(quote! {
            #(#field_attrs)*
            #field_vis #storage: #ty
        })
    });

    quote! {
        #(#attrs)*
        #vis struct #ident {
            #(#stored),*
        }
    }
}

/// Re-emit a class that keeps its own constructor, without engine attributes.
#[must_use]
pub fn untouched(class: &ClassDef) -> TokenStream {
    let ClassDef {
        ident,
        vis,
        attrs,
        fields,
        ..
    } = class;

    let fields = fields.iter().map(|field| {
        let field_attrs = &field.attrs;
        let field_vis = &field.vis;
        let field_ident = &field.ident;
        let ty = &field.ty;
        quote! {
            #(#field_attrs)*
            #field_vis #field_ident: #ty
        }
    });

    quote! {
        #(#attrs)*
        #vis struct #ident {
            #(#fields),*
        }
    }
}
