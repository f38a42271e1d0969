// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Factory defaults.
//!
//! A factory default is a zero-argument callable that produces a field's
//! default value. The attribute macro treats a default as a factory when it
//! is wrapped in [`factory`], given as `default_factory`, or named with the
//! factory suffix (`_factory` unless the class overrides it):
//!
//! ```rust,ignore
//! fn answer_factory() -> i64 {
//!     42
//! }
//!
//! #[inity]
//! pub struct Defaults {
//!     #[field(default = answer_factory)]
//!     pub answer: i64,
//!     #[field(default = factory(HashMap::new))]
//!     pub index: HashMap<String, u32>
//! }
//! ```
//!
//! # Evaluation
//!
//! Factories are invoked once per class, the first time a default of that
//! class is needed; every instance that takes the default receives a clone of
//! the materialized value. A factory returning `Arc<T>` therefore hands every
//! instance the same allocation. A fresh value per instance needs an explicit
//! argument.

/// A callable tagged as a default factory.
///
/// Created with [`factory`]. Wrapping works for any zero-argument callable,
/// including plain function items such as `Vec::new` or `String::new`, which
/// cannot be tagged in place.
#[derive(Debug, Clone, Copy)]
pub struct Factory<F>(F);

/// Tag a zero-argument callable as a default factory.
///
/// Anything that is not a zero-argument callable is rejected at the call
/// site, as is an already tagged factory.
///
/// # Example
///
/// ```rust
/// use inity_core::{DefaultFactory, factory};
///
/// let greeting = factory(|| "hi".to_string());
/// assert_eq!(greeting.produce(), "hi");
///
/// let empty = factory(Vec::<u8>::new);
/// assert!(empty.call().is_empty());
/// ```
pub const fn factory<F, T>(callable: F) -> Factory<F>
where
    F: Fn() -> T
{
    Factory(callable)
}

impl<F> Factory<F> {
    /// Invoke the wrapped callable.
    pub fn call<T>(&self) -> T
    where
        F: Fn() -> T
    {
        (self.0)()
    }

    /// Unwrap the callable.
    pub fn into_inner(self) -> F {
        self.0
    }
}

/// Produces a default value.
///
/// Implemented for every zero-argument callable and for [`Factory`].
/// Generated constructors call [`produce`](Self::produce) once per class when
/// materializing factory defaults.
pub trait DefaultFactory<T> {
    /// Produce the default value.
    fn produce(&self) -> T;
}

impl<T, F> DefaultFactory<T> for F
where
    F: Fn() -> T
{
    fn produce(&self) -> T {
        self()
    }
}

impl<T, F> DefaultFactory<T> for Factory<F>
where
    F: Fn() -> T
{
    fn produce(&self) -> T {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::atomic::{AtomicUsize, Ordering}
    };

    use super::*;

    fn some_factory() -> i64 {
        314
    }

    #[test]
    fn plain_callable_produces() {
        assert_eq!(some_factory.produce(), 314);
    }

    #[test]
    fn wrapped_builtin_produces_fresh_value() {
        let dict = factory(HashMap::<String, i64>::new);
        let value: HashMap<String, i64> = dict.produce();
        assert!(value.is_empty());
    }

    #[test]
    fn wrapped_closure_produces() {
        let greeting = factory(|| "hi");
        assert_eq!(greeting.produce(), "hi");
        assert_eq!(greeting.call(), "hi");
    }

    #[test]
    fn factory_runs_on_every_produce() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let counted = factory(|| CALLS.fetch_add(1, Ordering::SeqCst));
        counted.produce();
        counted.produce();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn into_inner_returns_callable() {
        let zero = factory(i64::default).into_inner();
        assert_eq!(zero(), 0);
    }
}
