// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use inity_core::prelude::*;
//! ```

#[cfg(feature = "serde")]
pub use crate::as_mapping;
pub use crate::{
    ClassVar, DefaultFactory, DefaultKind, Factory, FieldInfo, FieldRole, InitVar, Inity,
    MetaValue, factory
};
