// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Constructor signature.
//!
//! Parameters are the fields whose role is not class-scoped, split by
//! whether a default exists. Required parameters come first in field-list
//! order and become positional parameters of `new`; keyword parameters keep
//! their relative order and become fields of `{Class}Options`.

use std::fmt;

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    class::{
        collector::FieldList,
        descriptor::{FieldDescriptor, ResolvedDefault}
    },
    utils::tokens::type_text
};

/// Required and keyword parameters of a constructor.
#[derive(Debug)]
pub struct Signature<'a> {
    required: Vec<&'a FieldDescriptor>,
    keyword:  Vec<&'a FieldDescriptor>
}

impl<'a> Signature<'a> {
    /// Partition the parameters of `fields`.
    #[must_use]
    pub fn new(fields: &'a FieldList) -> Self {
        let (keyword, required): (Vec<_>, Vec<_>) = fields
            .iter()
            .filter(|field| field.role().is_parameter())
            .partition(|field| field.has_default());
        Self {
            required,
            keyword
        }
    }

    /// Parameters without a default.
    #[must_use]
    pub fn required(&self) -> &[&'a FieldDescriptor] {
        &self.required
    }

    /// Parameters with a default.
    #[must_use]
    pub fn keyword(&self) -> &[&'a FieldDescriptor] {
        &self.keyword
    }

    /// Keyword parameters whose default is a factory, in order.
    pub fn factories(&self) -> impl Iterator<Item = &'a FieldDescriptor> + '_ {
        self.keyword
            .iter()
            .copied()
            .filter(|field| matches!(field.default, ResolvedDefault::Factory(_)))
    }

    /// `name: Type` tokens of the required parameters.
    #[must_use]
    pub fn required_params(&self) -> Vec<TokenStream> {
        self.required
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.value_ty;
                quote! { #ident: #ty }
            })
            .collect()
    }
}

/// Summary in the form `(a: i64, b: String, *, c: i64 = 1)`.
impl fmt::Display for Signature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .required
            .iter()
            .map(|field| format!("{}: {}", field.name(), type_text(&field.value_ty)))
            .collect();
        if !self.keyword.is_empty() {
            parts.push("*".to_string());
            parts.extend(self.keyword.iter().map(|field| {
                format!(
                    "{}: {} = {}",
                    field.name(),
                    type_text(&field.value_ty),
                    field.default.summary()
                )
            }));
        }
        write!(f, "({})", parts.join(", "))
    }
}
