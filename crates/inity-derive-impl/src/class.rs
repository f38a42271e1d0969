// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class attribute macro implementation.
//!
//! This module contains all code generation logic for `#[inity]`. It decides
//! whether the macro sits on a single struct or on a class module, builds the
//! class table, and hands every class to the synthesizer.
//!
//! # Architecture
//!
//! ```text
//! class.rs (orchestrator)
//! │
//! ├── parse/         → Attribute parsing (ClassDef, FieldDef, FieldSpec)
//! │   └── module.rs  → Class module scanning (impl blocks, own constructors)
//! │
//! ├── walker.rs      → ClassTable, linearized ancestry, AnnotationWalker
//! ├── classify.rs    → Field roles from declared types and defaults
//! ├── descriptor.rs  → FieldDescriptor with its resolved default
//! ├── collector.rs   → Ordered, name-unique FieldList
//! │
//! └── synth/         → Code generation
//!     ├── signature.rs → Required and keyword parameter partition
//!     ├── body.rs      → Assignments, hook call, discarded parameters
//!     ├── layout.rs    → The rewritten struct
//!     ├── options.rs   → `{Class}Options` and the factory default cell
//!     ├── constants.rs → Associated constants of class-scoped fields
//!     └── directory.rs → `impl Inity`
//! ```
//!
//! # Pipeline
//!
//! ```text
//! ClassDef ──► AnnotationWalker ──► FieldCollector ──► FieldList
//!                                                        │
//!              new / new_with / Options / consts ◄── synth
//! ```

pub mod classify;
mod collector;
mod descriptor;
pub mod parse;
mod synth;
mod walker;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Item, ItemStruct};

use self::{parse::ClassDef, walker::ClassTable};

/// Main entry point for the `#[inity]` attribute.
pub fn expand(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let item = match syn::parse::<Item>(item) {
        Ok(item) => item,
        Err(err) => return err.to_compile_error().into()
    };

    let result = match item {
        Item::Struct(item) => expand_struct(args, &item),
        Item::Mod(module) => parse::module::expand(args, module),
        other => Err(darling::Error::custom(
            "#[inity] applies to structs with named fields and to inline class modules"
        )
        .with_span(&other))
    };

    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Expand a standalone struct: a class without a base.
fn expand_struct(args: TokenStream2, item: &ItemStruct) -> darling::Result<TokenStream2> {
    let class = ClassDef::from_item(item, Some(args))?;
    if let Some(base) = class.extends() {
        return Err(darling::Error::custom(
            "`extends` needs every class of the hierarchy in one `#[inity] mod { ... }` block"
        )
        .with_span(base));
    }

    let table = ClassTable::new(vec![class]);
    match table.classes().first() {
        Some(class) => generate(&table, class),
        None => Ok(TokenStream2::new())
    }
}

/// Generate the items replacing one class declaration.
fn generate(table: &ClassTable, class: &ClassDef) -> darling::Result<TokenStream2> {
    if class.has_own_constructor() {
        return Ok(synth::layout::untouched(class));
    }

    let fields = collector::collect(table, class)?;
    require_own_hook(table, class, &fields)?;
    synth::generate(table, class, &fields)
}

/// Hooks are inherent methods and are not inherited: a subclass with
/// construction-only fields whose base has a hook must define its own.
fn require_own_hook(
    table: &ClassTable,
    class: &ClassDef,
    fields: &collector::FieldList
) -> darling::Result<()> {
    if class.has_hook() || fields.of_role(classify::FieldRole::InitVar).next().is_none() {
        return Ok(());
    }
    let Some(base) = table.mro(class)?.into_iter().skip(1).find(|base| base.has_hook()) else {
        return Ok(());
    };
    Err(darling::Error::custom(format!(
        "`{class}` has construction-only fields and its base `{base}` defines `{hook}`; \
         hooks are not inherited, define `{own}` in an `impl {class}` block of this module",
        class = class.ident,
        base = base.ident,
        hook = base.hook_ident(),
        own = class.hook_ident()
    ))
    .with_span(&class.ident))
}
