// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class module expansion.
//!
//! Every struct of the module carrying `#[inity]` is a class. Inherent
//! `impl` blocks are scanned for the hook method and for a hand-written
//! `new`/`new_with`; a class with its own constructor keeps it and is only
//! stripped of engine attributes, but still serves as a base for others.
//!
//! ```rust,ignore
//! #[inity]
//! mod model {
//!     #[inity]
//!     pub struct Base { #[field(default = 1)] pub a: i64 }
//!
//!     #[inity(extends = Base)]
//!     pub struct Sub { pub token: InitVar<String> }
//!
//!     impl Sub {
//!         fn after_init(&mut self, token: String) { /* ... */ }
//!     }
//! }
//! ```

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{ImplItem, Item, ItemImpl, ItemMod, ItemStruct, Type};

use super::ClassDef;
use crate::class::walker::ClassTable;

/// Expand `#[inity] mod name { ... }`.
///
/// # Errors
///
/// Returns accumulated errors of every class in the module.
pub fn expand(args: TokenStream, module: ItemMod) -> darling::Result<TokenStream> {
    if !args.is_empty() {
        return Err(darling::Error::custom(
            "a class module takes no options; put them on its classes"
        )
        .with_span(&args));
    }
    let Some((brace, items)) = module.content.clone() else {
        return Err(darling::Error::custom(
            "class modules must be inline: `#[inity] mod name { ... }`"
        )
        .with_span(&module.ident));
    };

    let mut errors = darling::Error::accumulator();
    let mut classes = Vec::new();
    let mut positions = Vec::new();
    for (position, item) in items.iter().enumerate() {
        if let Item::Struct(item) = item
            && is_class(item)
            && let Some(class) = errors.handle(ClassDef::from_item(item, None))
        {
            classes.push(class);
            positions.push(position);
        }
    }

    for item in &items {
        if let Item::Impl(item) = item {
            observe_impl(&mut classes, item);
        }
    }

    let table = ClassTable::new(classes);
    let mut generated = HashMap::new();
    for (class, position) in table.classes().iter().zip(positions) {
        if let Some(tokens) = errors.handle(crate::class::generate(&table, class)) {
            generated.insert(position, tokens);
        }
    }
    errors.finish()?;

    let items = items
        .into_iter()
        .enumerate()
        .map(|(position, item)| match generated.remove(&position) {
            Some(tokens) => Item::Verbatim(tokens),
            None => item
        })
        .collect();

    Ok(ItemMod {
        content: Some((brace, items)),
        ..module
    }
    .into_token_stream())
}

fn is_class(item: &ItemStruct) -> bool {
    item.attrs.iter().any(|attr| attr.path().is_ident("inity"))
}

fn observe_impl(classes: &mut [ClassDef], item: &ItemImpl) {
    if item.trait_.is_some() {
        return;
    }
    let Type::Path(self_ty) = &*item.self_ty else {
        return;
    };
    let Some(ident) = self_ty.path.get_ident() else {
        return;
    };

    for class in classes.iter_mut().filter(|class| class.ident == *ident) {
        for impl_item in &item.items {
            if let ImplItem::Fn(method) = impl_item {
                class.observe_method(&method.sig.ident);
            }
        }
    }
}
