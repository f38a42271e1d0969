// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the `#[inity]` macro.
//!
//! Class-level options are parsed with [`darling`]; field-level
//! `#[field(...)]` attributes are parsed manually, because their `default`
//! values are arbitrary expressions that must be kept verbatim.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── class.rs        - Class-level parsing (ClassAttrs, ClassDef, Settings)
//! ├── field.rs        - Field-level parsing (FieldDef)
//! │   ├── spec.rs     - `#[field(...)]` contents (FieldSpec)
//! │   └── metadata.rs - `metadata(key = literal, ...)` entries
//! └── module.rs       - Class module expansion
//! ```
//!
//! # Data Structures
//!
//! ```text
//! ClassDef
//! ├── ident: Ident            (struct name, e.g., "Sub")
//! ├── vis: Visibility
//! ├── attrs: Vec<Attribute>   (passed through to the rewritten struct)
//! ├── extends: Option<Ident>  (base class inside the class module)
//! ├── hook / detected_hook    (post-construction hook configuration)
//! ├── settings: Settings      (factory suffix, shadow prefix)
//! ├── own_constructor: bool   (class keeps its hand-written `new`)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident, ty, vis
//!         ├── attrs: Vec<Attribute>  (everything except `#[field]`)
//!         └── spec: Option<FieldSpec>
//! ```

mod class;
mod field;
pub mod module;

pub use class::{ClassDef, Settings};
pub use field::{FieldDef, FieldSpec, MetaEntry, is_factory_call};
