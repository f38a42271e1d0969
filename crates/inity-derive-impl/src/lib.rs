// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Class-Level `#[inity(...)]`
//!
//! ```rust,ignore
//! #[inity(
//!     extends = Base,              // Optional: base class (class modules only)
//!     hook = "after_init",         // Optional: post-construction hook name (bare `hook` = "after_init")
//!     factory_suffix = "_factory", // Optional: name tag of factory defaults
//!     shadow_prefix = "_",         // Optional: prefix of property shadow fields
//!     debug                        // Optional: print the generated constructor
//! )]
//! pub struct Sub { /* ... */ }
//! ```
//!
//! ## Field-Level `#[field(...)]`
//!
//! ```rust,ignore
//! pub struct Sub {
//!     pub required: String,                    // Required positional parameter
//!
//!     #[field(default = 1)]                    // Keyword parameter with a literal default
//!     pub count: i64,
//!
//!     #[field(default = factory(HashMap::new))] // Factory default, materialized once
//!     pub index: HashMap<String, u32>,
//!
//!     #[field(default_factory = Vec::new, metadata(column = "tags"))]
//!     pub tags: Vec<String>,
//!
//!     #[field(property)]                       // Stored as `_cached`, read by your accessor
//!     pub cached: Option<String>,
//!
//!     pub token: InitVar<String>,              // Handed to the hook, never stored
//!
//!     #[field(default = 16)]
//!     pub limit: ClassVar<usize>,              // `Sub::LIMIT`, never a parameter
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! For a class `Sub`, the macro generates:
//!
//! | Generated Item | Description |
//! |----------------|-------------|
//! | `struct Sub` | Stored fields only, inherited fields flattened in |
//! | `Sub::new(required…)` | Required parameters in field-list order |
//! | `SubOptions` | Keyword parameters with their resolved defaults (`Default`) |
//! | `Sub::new_with(required…, options)` | Constructor taking explicit keyword values |
//! | `Sub::LIMIT` | One associated constant per class-scoped field |
//! | `impl Inity for Sub` | The resolved field list |
//!
//! # Class Modules
//!
//! Inheritance needs every class of the hierarchy in view, so hierarchies
//! live in an inline module annotated with `#[inity]`:
//!
//! ```rust,ignore
//! #[inity]
//! mod shapes {
//!     #[inity]
//!     pub struct Base {
//!         #[field(default = 1)]
//!         pub has_default: i64
//!     }
//!
//!     #[inity(extends = Base)]
//!     pub struct Sub {
//!         pub no_default: String
//!     }
//! }
//!
//! let sub = shapes::Sub::new("hi".to_string());
//! assert_eq!(sub.has_default, 1);
//! ```
//!
//! An inherent `after_init` method (or the configured hook name) is called
//! after the fields are assigned, with every construction-only field. Naming
//! the hook or defining it in the class module calls it directly; otherwise
//! the call falls back to a no-op when the struct has no such method. Hooks
//! are not inherited: a subclass with construction-only fields whose base has
//! a hook must define its own. A class whose `impl` block already defines
//! `new` or `new_with` keeps its own constructor.

mod class;
mod utils;

use proc_macro::TokenStream;

/// Synthesize a constructor and field directory for a struct, or for every
/// marked struct of an inline module.
///
/// # Field Roles
///
/// | Declaration | Role | Constructor behavior |
/// |-------------|------|----------------------|
/// | `x: T` | standard | parameter assigned to `x` |
/// | `#[field(property)] x: T` | property shadow | parameter stored in `_x` |
/// | `x: InitVar<T>` | construction-only | parameter passed to the hook |
/// | `x: ClassVar<T>` | class-scoped | associated constant `X` |
///
/// Fields without a default become required positional parameters of `new`;
/// fields with a default become fields of the generated `{Class}Options`
/// struct taken by `new_with`, regardless of declaration order.
///
/// # Errors
///
/// Compile errors are reported for tuple structs, generic structs, unknown
/// base classes, inheritance cycles, marker types without a value type,
/// `property` combined with a default, malformed `factory(...)` calls, and
/// subclasses with construction-only fields that rely on a base's hook.
#[proc_macro_attribute]
pub fn inity(args: TokenStream, item: TokenStream) -> TokenStream {
    class::expand(args, item)
}
