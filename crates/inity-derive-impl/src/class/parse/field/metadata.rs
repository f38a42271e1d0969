// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `metadata(key = literal, ...)` entries.
//!
//! | Type | Syntax | Generated |
//! |------|--------|-----------|
//! | String | `column = "name"` | `MetaValue::Str("name")` |
//! | Integer | `width = -3` | `MetaValue::Int(-3i64)` |
//! | Float | `weight = 0.5` | `MetaValue::Float(0.5f64)` |
//! | Boolean | `indexed = true` | `MetaValue::Bool(true)` |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, Lit, UnOp, ext::IdentExt, meta::ParseNestedMeta};

/// Literal metadata value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaLiteral {
    /// String literal.
    Str(String),

    /// Integer literal, sign included.
    Int(i64),

    /// Float literal, sign included.
    Float(f64),

    /// Boolean literal.
    Bool(bool)
}

impl MetaLiteral {
    fn from_expr(expr: &Expr) -> Option<Self> {
        match expr {
            Expr::Lit(lit) => Self::from_lit(&lit.lit),
            Expr::Group(group) => Self::from_expr(&group.expr),
            Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
                match Self::from_expr(&unary.expr)? {
                    Self::Int(value) => Some(Self::Int(-value)),
                    Self::Float(value) => Some(Self::Float(-value)),
                    _ => None
                }
            }
            _ => None
        }
    }

    fn from_lit(lit: &Lit) -> Option<Self> {
        match lit {
            Lit::Str(s) => Some(Self::Str(s.value())),
            Lit::Int(i) => i.base10_parse().ok().map(Self::Int),
            Lit::Float(f) => f.base10_parse().ok().map(Self::Float),
            Lit::Bool(b) => Some(Self::Bool(b.value())),
            _ => None
        }
    }

    /// `::inity::MetaValue` expression for this literal.
    #[must_use]
    pub fn to_tokens(&self) -> TokenStream {
        match self {
            Self::Str(s) => quote! { ::inity::MetaValue::Str(#s) },
            Self::Int(i) => quote! { ::inity::MetaValue::Int(#i) },
            Self::Float(f) => quote! { ::inity::MetaValue::Float(#f) },
            Self::Bool(b) => quote! { ::inity::MetaValue::Bool(#b) }
        }
    }
}

/// One `key = literal` metadata entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaEntry {
    /// Entry key.
    pub key: String,

    /// Entry value.
    pub value: MetaLiteral
}

impl MetaEntry {
    /// Parse one entry inside `metadata(...)`.
    ///
    /// # Errors
    ///
    /// Returns an error when the key is not a plain identifier or the value
    /// is not a literal.
    pub fn parse(entry: &ParseNestedMeta<'_>) -> syn::Result<Self> {
        let key = entry
            .path
            .get_ident()
            .ok_or_else(|| entry.error("metadata keys are plain identifiers"))?
            .unraw()
            .to_string();
        let expr: Expr = entry.value()?.parse()?;
        let value = MetaLiteral::from_expr(&expr).ok_or_else(|| {
            syn::Error::new_spanned(&expr, "metadata values are literals")
        })?;
        Ok(Self {
            key,
            value
        })
    }

    /// `("key", MetaValue)` tuple expression.
    #[must_use]
    pub fn to_tokens(&self) -> TokenStream {
        let key = &self.key;
        let value = self.value.to_tokens();
        quote! { (#key, #value) }
    }
}
