// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for one class.
//!
//! Given the field list of a class, this module emits:
//!
//! | Item | Module |
//! |------|--------|
//! | the rewritten struct | [`layout`] |
//! | `{Class}Options` and its `Default` | [`options`] |
//! | `new` / `new_with` | this module, from [`signature`] and [`body`] |
//! | associated constants | [`constants`] |
//! | `impl Inity` | [`directory`] |
//!
//! The constructor `impl` block is parsed back with syn before it is
//! returned; a block that does not parse is reported as a compile error
//! naming the class, together with the generated source.

mod body;
mod constants;
mod directory;
pub mod layout;
mod options;
mod signature;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, ItemImpl};

use self::{body::Body, signature::Signature};
use super::{collector::FieldList, parse::ClassDef, walker::ClassTable};

/// Generate every item of `class`.
///
/// # Errors
///
/// Returns errors for class-scoped fields without a constant default and for
/// a constructor that does not parse.
pub fn generate(table: &ClassTable, class: &ClassDef, fields: &FieldList) -> darling::Result<TokenStream> {
    let signature = Signature::new(fields);
    let body = Body::new(class, fields);

    let layout = layout::generate(class, fields);
    let options = options::generate(class, &signature);
    let constructor = check(class, constructor(class, &signature, &body))?;
    let constants = constants::generate(table, class, fields)?;
    let directory = directory::generate(class, fields);

    if class.debug() {
        eprintln!(
            "inity: {}::new{}\n{}\n{}",
            class.ident, signature, options, constructor
        );
    }

    Ok(quote! {
        #layout
        #options
        #constructor
        #constants
        #directory
    })
}

fn constructor(class: &ClassDef, signature: &Signature<'_>, body: &Body<'_>) -> TokenStream {
    let ident = &class.ident;
    let vis = &class.vis;
    let params = signature.required_params();
    let doc = format!("Creates a new [`{ident}`] from its required fields.");

    if signature.keyword().is_empty() {
        return quote! {
            impl #ident {
                #[doc = #doc]
                #[must_use]
                #[allow(clippy::too_many_arguments, clippy::new_without_default)]
                #vis fn new(#(#params),*) -> Self {
                    #body
                }
            }
        };
    }

    let options_ident = class.options_ident();
    let options = Ident::new("options", Span::mixed_site());
    let names = signature.required().iter().map(|field| &field.ident);
    let keywords = signature.keyword().iter().map(|field| &field.ident);
    let defaults = options::defaults_cell(class, signature);
    let new_doc = format!("{doc}\n\nKeyword fields take the defaults of [`{options_ident}`].");
    let new_with_doc =
        format!("Creates a new [`{ident}`] with explicit keyword fields from [`{options_ident}`].");

    quote! {
        impl #ident {
            #[doc = #new_doc]
            #[must_use]
            #[allow(clippy::too_many_arguments, clippy::new_without_default)]
            #vis fn new(#(#params),*) -> Self {
                Self::new_with(#(#names,)* ::core::default::Default::default())
            }

            #[doc = #new_with_doc]
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            #vis fn new_with(#(#params,)* #options: #options_ident) -> Self {
                let #options_ident { #(#keywords),* } = #options;
                #body
            }

            #defaults
        }
    }
}

fn check(class: &ClassDef, tokens: TokenStream) -> darling::Result<TokenStream> {
    match syn::parse2::<ItemImpl>(tokens.clone()) {
        Ok(_) => Ok(tokens),
        Err(err) => Err(darling::Error::custom(format!(
            "generated constructor of `{}` does not parse: {err}\n{tokens}",
            class.ident
        ))
        .with_span(&class.ident))
    }
}

#[cfg(test)]
mod tests {
    use syn::{File, ImplItem, Item, ItemStruct, parse_quote};

    use super::*;
    use crate::class::collector;

    fn expand(items: Vec<ItemStruct>) -> File {
        let table = ClassTable::new(
            items
                .iter()
                .map(|item| ClassDef::from_item(item, None).unwrap())
                .collect()
        );
        let class = table.classes().last().unwrap();
        let fields = collector::collect(&table, class).unwrap();
        syn::parse2(generate(&table, class, &fields).unwrap()).unwrap()
    }

    fn methods(file: &File, ty: &str) -> Vec<String> {
        file.items
            .iter()
            .filter_map(|item| match item {
                Item::Impl(item) if item.trait_.is_none() => Some(item),
                _ => None
            })
            .filter(|item| matches!(&*item.self_ty, syn::Type::Path(path) if path.path.is_ident(ty)))
            .flat_map(|item| item.items.iter())
            .filter_map(|item| match item {
                ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
                _ => None
            })
            .collect()
    }

    fn new_arity(file: &File, ty: &str, method: &str) -> usize {
        file.items
            .iter()
            .filter_map(|item| match item {
                Item::Impl(item) if item.trait_.is_none() => Some(item),
                _ => None
            })
            .filter(|item| matches!(&*item.self_ty, syn::Type::Path(path) if path.path.is_ident(ty)))
            .flat_map(|item| item.items.iter())
            .find_map(|item| match item {
                ImplItem::Fn(f) if f.sig.ident == method => Some(f.sig.inputs.len()),
                _ => None
            })
            .unwrap()
    }

    fn has_struct(file: &File, name: &str) -> bool {
        file.items
            .iter()
            .any(|item| matches!(item, Item::Struct(item) if item.ident == name))
    }

    #[test]
    fn required_only_class_has_no_options() {
        let file = expand(vec![parse_quote! {
            #[inity]
            pub struct Point { pub x: i64, pub y: i64 }
        }]);
        assert_eq!(methods(&file, "Point"), ["new"]);
        assert_eq!(new_arity(&file, "Point", "new"), 2);
        assert!(!has_struct(&file, "PointOptions"));
    }

    #[test]
    fn keyword_fields_produce_options() {
        let file = expand(vec![parse_quote! {
            #[inity]
            pub struct Basic {
                pub a: i64,
                #[field(default = 1)]
                pub b: i64,
                pub c: String
            }
        }]);
        assert_eq!(methods(&file, "Basic"), ["new", "new_with"]);
        assert_eq!(new_arity(&file, "Basic", "new"), 2);
        assert_eq!(new_arity(&file, "Basic", "new_with"), 3);
        assert!(has_struct(&file, "BasicOptions"));
    }

    #[test]
    fn factory_defaults_add_hidden_cell() {
        let file = expand(vec![parse_quote! {
            #[inity]
            pub struct Tags {
                #[field(default_factory = Vec::new)]
                pub tags: Vec<String>
            }
        }]);
        assert_eq!(methods(&file, "Tags"), ["new", "new_with", "__inity_defaults"]);
        assert_eq!(new_arity(&file, "Tags", "new"), 0);
    }

    #[test]
    fn class_without_fields_still_constructs() {
        let file = expand(vec![parse_quote! {
            #[inity]
            pub struct Empty {}
        }]);
        assert_eq!(methods(&file, "Empty"), ["new"]);
    }

    #[test]
    fn class_var_becomes_constant() {
        let file = expand(vec![parse_quote! {
            #[inity]
            pub struct Limits {
                #[field(default = 16)]
                pub max_items: ClassVar<usize>,
                pub name: String
            }
        }]);
        let constants: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Impl(item) if item.trait_.is_none() => Some(item),
                _ => None
            })
            .flat_map(|item| item.items.iter())
            .filter_map(|item| match item {
                ImplItem::Const(constant) => Some(constant.ident.to_string()),
                _ => None
            })
            .collect();
        assert_eq!(constants, ["MAX_ITEMS"]);
        assert_eq!(new_arity(&file, "Limits", "new"), 1);
    }
}
