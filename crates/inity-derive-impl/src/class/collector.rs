// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field collection.
//!
//! Annotations are inserted into an [`IndexMap`] keyed by field name. A name
//! that appears again keeps the position of its first appearance, while the
//! descriptor of its last appearance replaces the value. Because the walker
//! visits the most-derived class first, a field redeclared by a subclass
//! keeps the subclass position but carries the declaration of the most
//! distant ancestor.

use indexmap::IndexMap;

use super::{
    classify::FieldRole,
    descriptor::FieldDescriptor,
    parse::ClassDef,
    walker::{AnnotationWalker, ClassTable}
};

/// Ordered, name-unique field list of one class.
#[derive(Debug, Default)]
pub struct FieldList {
    fields: Vec<FieldDescriptor>
}

impl FieldList {
    /// Descriptors in order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Descriptors whose role is `role`.
    pub fn of_role(&self, role: FieldRole) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(move |field| field.role() == role)
    }

    /// Descriptors stored in the instance.
    pub fn stored(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.role().is_stored())
    }
}

/// Collect the field list of `class`.
///
/// # Errors
///
/// Returns accumulated descriptor errors and ancestry errors.
pub fn collect(table: &ClassTable, class: &ClassDef) -> darling::Result<FieldList> {
    let walker = AnnotationWalker::new(table, class)?;
    let mut slots: IndexMap<String, FieldDescriptor> = IndexMap::new();
    let mut errors = darling::Error::accumulator();

    for annotation in walker.walk() {
        let descriptor = FieldDescriptor::resolve(table, annotation, class.settings());
        if let Some(descriptor) = errors.handle(descriptor) {
            slots.insert(descriptor.name(), descriptor);
        }
    }
    errors.finish()?;

    Ok(FieldList {
        fields: slots.into_values().collect()
    })
}
