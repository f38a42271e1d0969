// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-class field directory.
//!
//! Every class processed by `#[inity]` implements [`Inity`], exposing the
//! resolved field list as a constant slice of [`FieldInfo`]. The list is
//! built once at expansion time and never changes afterwards.
//!
//! ```rust,ignore
//! #[inity]
//! pub struct Bob {
//!     pub some_int: i64,
//!     #[field(default = "s", metadata(column = "txt"))]
//!     pub some_str: String
//! }
//!
//! let field = Bob::field("some_str").unwrap();
//! assert_eq!(field.role(), FieldRole::Standard);
//! assert_eq!(field.metadata("column"), Some(&MetaValue::Str("txt")));
//! ```

use std::fmt;

/// The role a field plays in construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldRole {
    /// Constructor parameter assigned to the field of the same name.
    #[default]
    Standard,

    /// Constructor parameter stored under a prefixed shadow field that a
    /// user-written accessor reads.
    PropertyShadow,

    /// Constructor parameter handed to the post-construction hook and never
    /// stored.
    InitVar,

    /// Associated constant; never a constructor parameter.
    ClassVar
}

impl FieldRole {
    /// Upper-snake marker name of the role.
    pub const fn marker_name(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::PropertyShadow => "PROPERTY_SHADOW",
            Self::InitVar => "INIT_VAR",
            Self::ClassVar => "CLASS_VAR"
        }
    }

    /// Check if fields of this role are constructor parameters.
    pub const fn is_parameter(&self) -> bool {
        !matches!(self, Self::ClassVar)
    }

    /// Check if fields of this role are stored on the instance.
    pub const fn is_stored(&self) -> bool {
        matches!(self, Self::Standard | Self::PropertyShadow)
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker_name())
    }
}

/// Shape of a field's resolved default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefaultKind {
    /// No default; the field is a required parameter.
    #[default]
    Missing,

    /// A literal or expression default.
    Value,

    /// A factory default, materialized once per class.
    Factory,

    /// A property placeholder; the value arrives through the argument.
    Property
}

impl DefaultKind {
    /// Check if a default is present.
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// A metadata value attached with `#[field(metadata(...))]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetaValue {
    /// String literal.
    Str(&'static str),
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool)
}

impl MetaValue {
    /// Get the string value, if this is a string.
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Str(value) => Some(*value),
            _ => None
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => write!(f, "{:?}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Bool(value) => write!(f, "{}", value)
        }
    }
}

/// One resolved field of a class.
///
/// Generated code builds these with the `const` constructors below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldInfo {
    name:        &'static str,
    type_name:   &'static str,
    role:        FieldRole,
    default:     DefaultKind,
    declared_in: &'static str,
    storage:     Option<&'static str>,
    metadata:    &'static [(&'static str, MetaValue)]
}

impl FieldInfo {
    /// Create a field entry.
    ///
    /// # Arguments
    ///
    /// * `name`: Field name as declared
    /// * `type_name`: Declared type, as written
    /// * `role`: Resolved role
    /// * `default`: Shape of the resolved default
    /// * `declared_in`: Class whose declaration won the field's slot
    pub const fn new(
        name: &'static str,
        type_name: &'static str,
        role: FieldRole,
        default: DefaultKind,
        declared_in: &'static str
    ) -> Self {
        Self {
            name,
            type_name,
            role,
            default,
            declared_in,
            storage: None,
            metadata: &[]
        }
    }

    /// Set the name of the struct field holding the value.
    pub const fn with_storage(mut self, storage: &'static str) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Attach metadata entries.
    pub const fn with_metadata(mut self, metadata: &'static [(&'static str, MetaValue)]) -> Self {
        self.metadata = metadata;
        self
    }

    /// Field name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type as written in the class.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Resolved role.
    pub const fn role(&self) -> FieldRole {
        self.role
    }

    /// Shape of the resolved default.
    pub const fn default_kind(&self) -> DefaultKind {
        self.default
    }

    /// Check if the field has a default.
    pub const fn has_default(&self) -> bool {
        self.default.is_present()
    }

    /// Class whose declaration won the field's slot.
    pub const fn declared_in(&self) -> &'static str {
        self.declared_in
    }

    /// Struct field holding the value, for stored fields.
    ///
    /// Property-shadowed fields report their prefixed shadow name.
    pub const fn storage(&self) -> Option<&'static str> {
        self.storage
    }

    /// All metadata entries, in declaration order.
    pub const fn metadata_entries(&self) -> &'static [(&'static str, MetaValue)] {
        self.metadata
    }

    /// Look up a metadata entry.
    pub fn metadata(&self, key: &str) -> Option<&'static MetaValue> {
        self.metadata
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}

/// A class with a synthesized constructor and a resolved field list.
///
/// Implemented by `#[inity]`; the field list is in the order in which each
/// name was first seen walking the class and then its ancestors.
pub trait Inity {
    /// Class name.
    const NAME: &'static str;

    /// Resolved field list.
    const FIELDS: &'static [FieldInfo];

    /// Look up a field by name.
    fn field(name: &str) -> Option<&'static FieldInfo> {
        Self::FIELDS.iter().find(|field| field.name() == name)
    }

    /// All fields with the given role, in field-list order.
    fn fields_of(role: FieldRole) -> impl Iterator<Item = &'static FieldInfo> {
        Self::FIELDS.iter().filter(move |field| field.role() == role)
    }
}
