// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl Inity` with the resolved field list.

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    class::{collector::FieldList, parse::ClassDef},
    utils::tokens::type_text
};

/// Generate the field directory of `class`.
#[must_use]
pub fn generate(class: &ClassDef, fields: &FieldList) -> TokenStream {
    let ident = &class.ident;
    let name = ident.to_string();

    let entries = fields.iter().map(|field| {
        let field_name = field.name();
        let type_name = type_text(&field.ty);
        let role = field.role();
        let default = field.default.kind_tokens();
        let declared_in = field.declared_in.to_string();

        let storage = field.storage_ident().map(|storage| {
            let storage = syn::ext::IdentExt::unraw(storage).to_string();
            quote! { .with_storage(#storage) }
        });
        let metadata = (!field.metadata.is_empty()).then(|| {
            let entries = field.metadata.iter().map(|entry| entry.to_tokens());
            quote! { .with_metadata(&[#(#entries),*]) }
        });

        quote! {
            ::inity::FieldInfo::new(#field_name, #type_name, #role, #default, #declared_in)
                #storage
                #metadata
        }
    });

    quote! {
        impl ::inity::Inity for #ident {
            const NAME: &'static str = #name;
            const FIELDS: &'static [::inity::FieldInfo] = &[#(#entries),*];
        }
    }
}
