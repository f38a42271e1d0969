// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # inity
//!
//! One crate, all features. Re-exports:
//! - [`inity`](macro@inity) attribute macro from `inity-derive-impl`
//! - All types from `inity-core` ([`InitVar`], [`ClassVar`], [`factory`],
//!   [`Inity`], [`FieldInfo`])
//!
//! # Quick Start
//!
//! ```rust
//! use inity::prelude::*;
//!
//! #[inity]
//! #[derive(Debug)]
//! pub struct Basic {
//!     pub a: i64,
//!     #[field(default = 1)]
//!     pub b: i64,
//!     pub c: String
//! }
//!
//! let basic = Basic::new(2, "hi".to_string());
//! assert_eq!((basic.a, basic.b, basic.c.as_str()), (2, 1, "hi"));
//!
//! let basic = Basic::new_with(2, "hi".to_string(), BasicOptions { b: 7 });
//! assert_eq!(basic.b, 7);
//!
//! let names: Vec<_> = Basic::FIELDS.iter().map(|f| f.name()).collect();
//! assert_eq!(names, ["a", "b", "c"]);
//! ```

pub use inity_core::*;
pub use inity_derive_impl::inity;

/// Convenient re-exports, the macro included.
///
/// ```rust
/// use inity::prelude::*;
///
/// #[inity]
/// pub struct Counter {
///     #[field(default = 0)]
///     pub count: u32
/// }
///
/// assert_eq!(Counter::new().count, 0);
/// ```
pub mod prelude {
    pub use inity_core::prelude::*;
    pub use inity_derive_impl::inity;
}

/// Calls the generated constructors reject at compile time.
///
/// Declarations the macro itself rejects are covered by the trybuild cases
/// under `tests/cases/fail`.
///
/// Class-scoped fields are not keyword parameters, even when the class has
/// an options struct:
///
/// ```rust,compile_fail,E0560
/// use inity::prelude::*;
///
/// #[inity]
/// pub struct Holder {
///     #[field(default = 1)]
///     pub size: u8,
///     #[field(default = 3)]
///     pub limit: ClassVar<u8>
/// }
///
/// let _ = Holder::new_with(HolderOptions { size: 2, limit: 4 });
/// ```
///
/// Unknown keywords do not exist on the options struct:
///
/// ```rust,compile_fail,E0560
/// use inity::prelude::*;
///
/// #[inity]
/// pub struct Basic {
///     pub a: i64,
///     #[field(default = 1)]
///     pub b: i64
/// }
///
/// let _ = Basic::new_with(1, BasicOptions { b: 2, d: 3 });
/// ```
///
/// Required parameters cannot be left out:
///
/// ```rust,compile_fail,E0061
/// use inity::prelude::*;
///
/// #[inity]
/// pub struct Basic {
///     pub a: i64,
///     pub c: String
/// }
///
/// let _ = Basic::new(1);
/// ```
///
/// Construction-only fields are not stored:
///
/// ```rust,compile_fail,E0609
/// use inity::prelude::*;
///
/// #[inity]
/// pub struct Holder {
///     pub token: InitVar<String>
/// }
///
/// let holder = Holder::new("secret".to_string());
/// let _ = holder.token;
/// ```
#[doc(hidden)]
pub mod rejected {}
