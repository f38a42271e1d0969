// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level parsing.
//!
//! A field's role is never decided here: the declared type and the resolved
//! default decide it later, after inheritance has been taken into account.
//! This module only records what the declaration says.
//!
//! # Example
//!
//! ```rust,ignore
//! pub name: String,                         // no spec: no class attribute
//!
//! #[field(default = 1)]                     // FieldSpec::default
//! pub count: i64,
//!
//! #[field(default_factory = Vec::new)]      // FieldSpec::default_factory
//! pub tags: Vec<String>,
//!
//! #[field(metadata(column = "n"))]          // metadata only, still no default
//! pub renamed: i64,
//!
//! #[field(property)]                        // FieldSpec::property
//! pub cached: String,
//! ```

mod metadata;
mod spec;

pub use metadata::MetaEntry;
pub use spec::{FieldSpec, is_factory_call};
use syn::{Attribute, Field, Ident, Type, Visibility, ext::IdentExt};

/// Field definition as written in a class body.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type, markers included.
    pub ty: Type,

    /// Field visibility.
    pub vis: Visibility,

    /// Attributes other than `#[field]`, passed through to generated code.
    pub attrs: Vec<Attribute>,

    spec: Option<FieldSpec>
}

impl FieldDef {
    /// Parse a named struct field.
    ///
    /// # Errors
    ///
    /// Returns an error for unnamed fields, repeated `#[field]` attributes,
    /// and invalid `#[field(...)]` contents.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("#[inity] fields must be named").with_span(field)
        })?;

        let mut spec = None;
        let mut attrs = Vec::with_capacity(field.attrs.len());
        for attr in &field.attrs {
            if !attr.path().is_ident("field") {
                attrs.push(attr.clone());
                continue;
            }
            if spec.is_some() {
                return Err(
                    darling::Error::custom("combine options into a single #[field(...)]")
                        .with_span(attr)
                );
            }
            spec = Some(FieldSpec::from_attr(attr)?);
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            vis: field.vis.clone(),
            attrs,
            spec
        })
    }

    /// Field name without any raw identifier prefix.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// The class attribute declared on this field, if any.
    ///
    /// Any `#[field(...)]`, even one carrying only metadata, makes the field
    /// a class attribute.
    #[must_use]
    pub const fn spec(&self) -> Option<&FieldSpec> {
        self.spec.as_ref()
    }
}
