// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Role marker types.
//!
//! The attribute macro recognises these types by name and consumes them: a
//! field declared as `InitVar<T>` becomes a constructor parameter of type `T`
//! that is handed to the post-construction hook, a field declared as
//! `ClassVar<T>` becomes an associated constant of type `T`. Neither ends up
//! in the generated struct.
//!
//! The types themselves only exist so that declarations stay meaningful when
//! the macro leaves a struct untouched (a class that writes its own
//! constructor) and so that the markers show up in documentation.

use std::{fmt, marker::PhantomData};

/// Construction-only field marker.
///
/// ```rust,ignore
/// #[inity]
/// pub struct Session {
///     pub user: String,
///     pub token: InitVar<String>
/// }
/// ```
pub struct InitVar<T: ?Sized>(PhantomData<fn() -> T>);

/// Class-scoped field marker.
///
/// ```rust,ignore
/// #[inity]
/// pub struct Limits {
///     #[field(default = 64)]
///     pub max_depth: ClassVar<usize>
/// }
///
/// assert_eq!(Limits::MAX_DEPTH, 64);
/// ```
pub struct ClassVar<T: ?Sized>(PhantomData<fn() -> T>);

macro_rules! marker_impls {
    ($($marker:ident),*) => {$(
        impl<T: ?Sized> $marker<T> {
            /// Create the marker.
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T: ?Sized> Default for $marker<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> Clone for $marker<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $marker<T> {}

        impl<T: ?Sized> PartialEq for $marker<T> {
            fn eq(&self, _: &Self) -> bool {
                true
            }
        }

        impl<T: ?Sized> Eq for $marker<T> {}

        impl<T: ?Sized> fmt::Debug for $marker<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($marker), std::any::type_name::<T>())
            }
        }
    )*};
}

marker_impls!(InitVar, ClassVar);
