// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime types for inity.
//!
//! This crate holds everything the code generated by `#[inity]` refers to at
//! runtime. It can also be used on its own to inspect field directories or to
//! build factory defaults by hand.
//!
//! # Overview
//!
//! - [`InitVar`] / [`ClassVar`]: marker types that assign a field its role
//! - [`factory`] / [`DefaultFactory`]: factory defaults, materialized once
//! - [`Inity`] / [`FieldInfo`]: the per-class field directory
//! - [`as_mapping`]: name → value projection of an instance (`serde`
//!   feature)
//! - [`prelude`]: convenient re-exports
//!
//! # Usage
//!
//! Most users should depend on `inity`, which re-exports this crate together
//! with the attribute macro:
//!
//! ```rust,ignore
//! use inity::prelude::*;
//!
//! #[inity]
//! pub struct Point {
//!     pub x: i64,
//!     #[field(default = 0)]
//!     pub y: i64
//! }
//!
//! let p = Point::new(3);
//! assert_eq!(Point::FIELDS.len(), 2);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod factory;
mod field;
#[cfg(feature = "serde")]
mod mapping;
mod markers;
pub mod prelude;

pub use factory::{DefaultFactory, Factory, factory};
pub use field::{DefaultKind, FieldInfo, FieldRole, Inity, MetaValue};
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use mapping::{Mapping, MappingError, as_mapping};
pub use markers::{ClassVar, InitVar};

/// Support items for generated code. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    use std::sync::OnceLock;

    /// Materialize the factory defaults of a class exactly once.
    ///
    /// Every later call returns the same reference, so all instances that
    /// take a factory default clone the same materialized value.
    pub fn materialize<T>(
        cell: &'static OnceLock<T>,
        class: &'static str,
        count: usize,
        init: impl FnOnce() -> T
    ) -> &'static T {
        cell.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(class, count, "materializing factory defaults");
            #[cfg(not(feature = "tracing"))]
            let _ = (class, count);
            init()
        })
    }
}
