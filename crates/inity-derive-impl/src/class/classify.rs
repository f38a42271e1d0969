// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field role classification.
//!
//! A role is derived from the resolved default and the declared type every
//! time it is needed:
//!
//! 1. A `property` default makes the field a property shadow.
//! 2. Otherwise the name of the declared type, converted to UPPER_SNAKE, is
//!    compared with the marker names `PROPERTY_SHADOW`, `INIT_VAR` and
//!    `CLASS_VAR`. Only the last path segment counts, so
//!    `inity::InitVar<T>` and `InitVar<T>` are the same marker.
//! 3. Otherwise a type that wraps `ClassVar<T>` in invisible or explicit
//!    grouping is class-scoped.
//! 4. Everything else is standard.
//!
//! Types without a name (references, tuples, slices, trait objects) never
//! match a marker.

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericArgument, PathArguments, Type, ext::IdentExt};

use super::descriptor::ResolvedDefault;

/// Role of a field in the generated constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Parameter assigned to the field of the same name.
    Standard,

    /// Parameter stored under the shadow name.
    PropertyShadow,

    /// Parameter handed to the hook and never stored.
    InitVar,

    /// Not a parameter; exposed as an associated constant.
    ClassVar
}

impl FieldRole {
    const MARKERS: [Self; 3] = [Self::PropertyShadow, Self::InitVar, Self::ClassVar];

    /// UPPER_SNAKE marker name of the role.
    #[must_use]
    pub const fn marker_name(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::PropertyShadow => "PROPERTY_SHADOW",
            Self::InitVar => "INIT_VAR",
            Self::ClassVar => "CLASS_VAR"
        }
    }

    /// Whether the field is a constructor parameter.
    #[must_use]
    pub const fn is_parameter(self) -> bool {
        !matches!(self, Self::ClassVar)
    }

    /// Whether the field is stored in the instance.
    #[must_use]
    pub const fn is_stored(self) -> bool {
        matches!(self, Self::Standard | Self::PropertyShadow)
    }

    fn from_marker(name: &str) -> Option<Self> {
        Self::MARKERS
            .into_iter()
            .find(|role| role.marker_name() == name)
    }
}

impl ToTokens for FieldRole {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::Standard => quote! { ::inity::FieldRole::Standard },
            Self::PropertyShadow => quote! { ::inity::FieldRole::PropertyShadow },
            Self::InitVar => quote! { ::inity::FieldRole::InitVar },
            Self::ClassVar => quote! { ::inity::FieldRole::ClassVar }
        });
    }
}

/// Convert a type name to UPPER_SNAKE: `InitVar` becomes `INIT_VAR`.
#[must_use]
pub fn upper_snake(name: &str) -> String {
    name.to_case(Case::Snake).to_uppercase()
}

/// Name of a declared type: the last path segment of a path type.
#[must_use]
pub fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.unraw().to_string()),
        _ => None
    }
}

fn peel(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => peel(&group.elem),
        Type::Paren(paren) => peel(&paren.elem),
        other => other
    }
}

/// Whether the type, with grouping removed, is `ClassVar<...>`.
#[must_use]
pub fn wraps_class_var(ty: &Type) -> bool {
    type_name(peel(ty)).is_some_and(|name| upper_snake(&name) == FieldRole::ClassVar.marker_name())
}

/// Marker role carried by the declared type alone.
#[must_use]
pub fn marker_role(ty: &Type) -> Option<FieldRole> {
    type_name(ty)
        .and_then(|name| FieldRole::from_marker(&upper_snake(&name)))
        .or_else(|| wraps_class_var(ty).then_some(FieldRole::ClassVar))
}

/// Role of a field with declared type `ty` and resolved `default`.
#[must_use]
pub fn classify(ty: &Type, default: &ResolvedDefault) -> FieldRole {
    if matches!(default, ResolvedDefault::Property) {
        return FieldRole::PropertyShadow;
    }
    marker_role(ty).unwrap_or(FieldRole::Standard)
}

/// Type of the values a field holds.
///
/// For marker types this is the single generic argument (`InitVar<String>`
/// holds `String`); any other type holds itself.
///
/// # Errors
///
/// Returns an error for a marker type without exactly one type argument.
pub fn value_type(ty: &Type) -> darling::Result<&Type> {
    let Some(role) = marker_role(ty) else {
        return Ok(ty);
    };
    marker_argument(peel(ty)).ok_or_else(|| {
        darling::Error::custom(format!(
            "{} marker needs the value type: `Marker<T>`",
            role.marker_name()
        ))
        .with_span(ty)
    })
}

fn marker_argument(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let PathArguments::AngleBracketed(args) = &path.path.segments.last()?.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None
    });
    let first = types.next()?;
    types.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn upper_snake_matches_marker_names() {
        assert_eq!(upper_snake("InitVar"), "INIT_VAR");
        assert_eq!(upper_snake("ClassVar"), "CLASS_VAR");
        assert_eq!(upper_snake("PropertyShadow"), "PROPERTY_SHADOW");
        assert_eq!(upper_snake("HTTPCode"), "HTTP_CODE");
        assert_eq!(upper_snake("init_var"), "INIT_VAR");
    }

    #[test]
    fn standard_types() {
        let missing = ResolvedDefault::Missing;
        assert_eq!(classify(&parse_quote!(i64), &missing), FieldRole::Standard);
        assert_eq!(classify(&parse_quote!(Vec<String>), &missing), FieldRole::Standard);
        assert_eq!(classify(&parse_quote!(HTTPCode), &missing), FieldRole::Standard);
    }

    #[test]
    fn marker_types_by_last_segment() {
        let missing = ResolvedDefault::Missing;
        assert_eq!(classify(&parse_quote!(InitVar<String>), &missing), FieldRole::InitVar);
        assert_eq!(
            classify(&parse_quote!(inity::InitVar<String>), &missing),
            FieldRole::InitVar
        );
        assert_eq!(classify(&parse_quote!(ClassVar<i64>), &missing), FieldRole::ClassVar);
        assert_eq!(
            classify(&parse_quote!(PropertyShadow<i64>), &missing),
            FieldRole::PropertyShadow
        );
    }

    #[test]
    fn property_default_wins_over_type() {
        let property = ResolvedDefault::Property;
        assert_eq!(classify(&parse_quote!(i64), &property), FieldRole::PropertyShadow);
        assert_eq!(classify(&parse_quote!(InitVar<i64>), &property), FieldRole::PropertyShadow);
    }

    #[test]
    fn grouped_class_var_is_class_scoped() {
        let missing = ResolvedDefault::Missing;
        assert_eq!(classify(&parse_quote!((ClassVar<i64>)), &missing), FieldRole::ClassVar);
        assert_eq!(classify(&parse_quote!((InitVar<i64>)), &missing), FieldRole::Standard);
    }

    #[test]
    fn unnamed_types_never_match() {
        let missing = ResolvedDefault::Missing;
        assert_eq!(classify(&parse_quote!(&'static str), &missing), FieldRole::Standard);
        assert_eq!(classify(&parse_quote!((i64, InitVar<i64>)), &missing), FieldRole::Standard);
        assert_eq!(classify(&parse_quote!([InitVar<u8>; 2]), &missing), FieldRole::Standard);
        assert_eq!(classify(&parse_quote!(<T as Tr>::InitVar), &missing), FieldRole::Standard);
    }

    #[test]
    fn value_type_unwraps_markers() {
        let ty: Type = parse_quote!(ClassVar<&'static str>);
        let expected: Type = parse_quote!(&'static str);
        assert_eq!(value_type(&ty).unwrap(), &expected);

        let ty: Type = parse_quote!(String);
        assert_eq!(value_type(&ty).unwrap(), &ty);
    }

    #[test]
    fn marker_without_argument_is_an_error() {
        assert!(value_type(&parse_quote!(InitVar)).is_err());
        assert!(value_type(&parse_quote!(ClassVar<i64, u8>)).is_err());
    }

    #[test]
    fn role_queries() {
        assert!(FieldRole::Standard.is_stored());
        assert!(FieldRole::PropertyShadow.is_stored());
        assert!(!FieldRole::InitVar.is_stored());
        assert!(FieldRole::InitVar.is_parameter());
        assert!(!FieldRole::ClassVar.is_parameter());
    }
}
