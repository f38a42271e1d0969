// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Name → value projection of an instance.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::field::Inity;

/// Ordered field name → value mapping.
pub type Mapping = serde_json::Map<String, Value>;

/// Error type for [`as_mapping`].
#[derive(Debug)]
pub enum MappingError {
    /// The instance could not be serialized.
    Serialize(serde_json::Error),

    /// The instance did not serialize to a map.
    NotAnObject {
        /// Class name.
        class: &'static str
    },

    /// A stored field was absent from the serialized instance.
    ///
    /// Happens when serde attributes rename or skip the field.
    MissingField {
        /// Class name.
        class: &'static str,
        /// Field name.
        field: &'static str
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(e) => write!(f, "serialization failed: {}", e),
            Self::NotAnObject {
                class
            } => write!(f, "`{}` does not serialize to a map", class),
            Self::MissingField {
                class,
                field
            } => write!(f, "`{}` serialized without field `{}`", class, field)
        }
    }
}

impl std::error::Error for MappingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(e) => Some(e),
            _ => None
        }
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Project an instance into a field name → value mapping.
///
/// Entries follow the class's field list. Only stored fields appear:
/// property-shadowed fields are read from their shadow field and reported
/// under the declared name; construction-only and class-scoped fields are
/// not instance state and are skipped.
///
/// # Errors
///
/// - [`MappingError::Serialize`] if serialization fails
/// - [`MappingError::NotAnObject`] if the instance is not a map
/// - [`MappingError::MissingField`] if a stored field is absent
///
/// # Example
///
/// ```rust,ignore
/// #[inity]
/// #[derive(Serialize)]
/// pub struct BeADict {
///     #[field(default = 1)]
///     pub a: i64,
///     #[field(default = "hi")]
///     pub c: String
/// }
///
/// let mapping = as_mapping(&BeADict::new())?;
/// assert_eq!(Value::Object(mapping), json!({"a": 1, "c": "hi"}));
/// ```
pub fn as_mapping<T>(instance: &T) -> Result<Mapping, MappingError>
where
    T: Inity + Serialize
{
    let Value::Object(mut object) = serde_json::to_value(instance)? else {
        return Err(MappingError::NotAnObject {
            class: T::NAME
        });
    };

    let mut mapping = Mapping::new();
    for field in T::FIELDS.iter().filter(|field| field.role().is_stored()) {
        let key = field.storage().unwrap_or(field.name());
        let value = object.remove(key).ok_or(MappingError::MissingField {
            class: T::NAME,
            field: field.name()
        })?;
        mapping.insert(field.name().to_string(), value);
    }
    Ok(mapping)
}
