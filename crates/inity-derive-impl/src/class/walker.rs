// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class table, ancestry linearization and annotation walking.
//!
//! Classes form single-inheritance chains through `extends`. The linearized
//! ancestry of a class is the class itself followed by its base, the base's
//! base, and so on. Annotations are produced most-derived class first, each
//! class's fields in declaration order:
//!
//! ```text
//! Sub   { no_default, has_default_override }   ──► no_default, has_default_override,
//! Base  { has_default, has_default_override }  ──► has_default, has_default_override
//! ```

use syn::Ident;

use super::parse::{ClassDef, FieldDef, FieldSpec};

/// All classes visible to one macro invocation, in declaration order.
#[derive(Debug)]
pub struct ClassTable {
    classes: Vec<ClassDef>
}

impl ClassTable {
    /// Create a table from parsed classes.
    #[must_use]
    pub const fn new(classes: Vec<ClassDef>) -> Self {
        Self {
            classes
        }
    }

    /// Classes in declaration order.
    #[must_use]
    pub fn classes(&self) -> &[ClassDef] {
        &self.classes
    }

    /// Class named `ident`.
    #[must_use]
    pub fn get(&self, ident: &Ident) -> Option<&ClassDef> {
        self.classes.iter().find(|class| class.ident == *ident)
    }

    /// Linearized ancestry of `class`, the class itself first.
    ///
    /// # Errors
    ///
    /// Returns an error naming the base that is not declared in the table, or
    /// the class that closes an inheritance cycle.
    pub fn mro<'a>(&'a self, class: &'a ClassDef) -> darling::Result<Vec<&'a ClassDef>> {
        let mut chain = vec![class];
        let mut current = class;
        while let Some(base) = current.extends() {
            let next = self.get(base).ok_or_else(|| {
                darling::Error::custom(format!(
                    "unknown base class `{base}`; declare it with #[inity] in the same class module"
                ))
                .with_span(base)
            })?;
            if chain.iter().any(|seen| seen.ident == next.ident) {
                return Err(darling::Error::custom(format!(
                    "inheritance cycle: `{}` is its own ancestor",
                    next.ident
                ))
                .with_span(base));
            }
            chain.push(next);
            current = next;
        }
        Ok(chain)
    }

    /// Class attribute `name` as seen from `class`.
    ///
    /// Looks through the ancestry of `class` for the nearest declaration of
    /// `name` carrying `#[field(...)]`.
    ///
    /// # Errors
    ///
    /// Propagates ancestry errors.
    pub fn class_attribute<'a>(
        &'a self,
        class: &'a ClassDef,
        name: &str
    ) -> darling::Result<Option<ClassAttribute<'a>>> {
        for owner in self.mro(class)? {
            if let Some(field) = owner.field(name)
                && let Some(spec) = field.spec()
            {
                return Ok(Some(ClassAttribute {
                    field,
                    spec
                }));
            }
        }
        Ok(None)
    }
}

/// A `#[field(...)]` declaration found by [`ClassTable::class_attribute`].
#[derive(Debug, Clone, Copy)]
pub struct ClassAttribute<'a> {
    /// The declaring field.
    pub field: &'a FieldDef,

    /// Its parsed options.
    pub spec: &'a FieldSpec
}

/// One `(declaring class, field)` pair.
#[derive(Debug, Clone, Copy)]
pub struct Annotation<'a> {
    /// Class whose body declares the field.
    pub class: &'a ClassDef,

    /// The declared field.
    pub field: &'a FieldDef
}

/// Walks every field annotation across the ancestry of a class.
///
/// [`walk`](Self::walk) can be called any number of times; each call yields
/// the full sequence again.
#[derive(Debug)]
pub struct AnnotationWalker<'a> {
    chain: Vec<&'a ClassDef>
}

impl<'a> AnnotationWalker<'a> {
    /// Linearize the ancestry of `class`.
    ///
    /// # Errors
    ///
    /// Propagates ancestry errors.
    pub fn new(table: &'a ClassTable, class: &'a ClassDef) -> darling::Result<Self> {
        Ok(Self {
            chain: table.mro(class)?
        })
    }

    /// Annotations, most-derived class first.
    pub fn walk(&self) -> impl Iterator<Item = Annotation<'a>> + '_ {
        self.chain.iter().flat_map(|&class| {
            class.fields.iter().map(move |field| Annotation {
                class,
                field
            })
        })
    }
}
