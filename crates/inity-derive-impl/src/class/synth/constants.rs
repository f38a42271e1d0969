// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Associated constants of class-scoped fields.
//!
//! A `ClassVar<T>` field is never a parameter. When the class attribute of
//! the same name, looked up from the class being generated, carries a value
//! default, the class gets an associated constant named after the field in
//! UPPER_SNAKE:
//!
//! ```rust,ignore
//! #[field(default = "Don't init me")]
//! pub class_var: ClassVar<&'static str>,
//! // impl Holder { pub const CLASS_VAR: &'static str = "Don't init me"; }
//! ```
//!
//! A subclass that redeclares the name keeps the role and the type of the
//! base declaration; only the value is taken from the nearest class
//! attribute.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::class::{
    classify::{self, FieldRole},
    collector::FieldList,
    descriptor::ResolvedDefault,
    parse::ClassDef,
    walker::ClassTable
};

/// Generate the associated constants of `class`.
///
/// # Errors
///
/// Returns an error for a class-scoped field whose default is a factory or
/// a property.
pub fn generate(table: &ClassTable, class: &ClassDef, fields: &FieldList) -> darling::Result<TokenStream> {
    let mut errors = darling::Error::accumulator();
    let mut constants = Vec::new();

    for field in fields.of_role(FieldRole::ClassVar) {
        let name = field.name();
        let Some(attribute) = table.class_attribute(class, &name)? else {
            continue;
        };

        match ResolvedDefault::from_spec(attribute.spec, class.settings()) {
            ResolvedDefault::Value(expr) => {
                let ty = &field.value_ty;
                let vis = &field.vis;
                let ident = format_ident!("{}", classify::upper_snake(&name));
                let doc = format!("Class-scoped `{name}`.");
                constants.push(quote! {
                    #[doc = #doc]
                    #vis const #ident: #ty = #expr;
                });
            }
            ResolvedDefault::Missing => {}
            ResolvedDefault::Factory(_) | ResolvedDefault::Property => {
                errors.push(
                    darling::Error::custom(format!(
                        "class-scoped field `{name}` needs a constant default, not a factory"
                    ))
                    .with_span(&attribute.field.ident)
                );
            }
        }
    }
    errors.finish()?;

    if constants.is_empty() {
        return Ok(TokenStream::new());
    }

    let ident = &class.ident;
    Ok(quote! {
        impl #ident {
            #(#constants)*
        }
    })
}
