// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[field(...)]` parsing.
//!
//! # Options
//!
//! | Option | Description |
//! |--------|-------------|
//! | `default = expr` | Default value; tagged expressions are factories |
//! | `default_factory = expr` | Zero-argument callable producing the default |
//! | `metadata(key = literal, ...)` | Entries exposed through `FieldInfo` |
//! | `property` | Stored under the shadow name; never has a default |
//!
//! When both `default` and `default_factory` are present, `default` is used.

use syn::{Attribute, Expr, ExprCall, Meta};

use super::metadata::MetaEntry;

/// Class attribute declared with `#[field(...)]`.
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    /// `default = expr`.
    pub default: Option<Expr>,

    /// `default_factory = expr`.
    pub default_factory: Option<Expr>,

    /// `metadata(...)` entries in declaration order.
    pub metadata: Vec<MetaEntry>,

    /// `property` flag.
    pub property: bool
}

impl FieldSpec {
    /// Parse a `#[field]` or `#[field(...)]` attribute.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or repeated options, metadata values that
    /// are not literals, `factory(...)` calls without exactly one argument,
    /// and `property` combined with a default.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut spec = Self::default();
        if matches!(attr.meta, Meta::Path(_)) {
            return Ok(spec);
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                if spec.default.is_some() {
                    return Err(meta.error("`default` is given twice"));
                }
                let expr: Expr = meta.value()?.parse()?;
                check_factory_calls(&expr)?;
                spec.default = Some(expr);
            } else if meta.path.is_ident("default_factory") {
                if spec.default_factory.is_some() {
                    return Err(meta.error("`default_factory` is given twice"));
                }
                let expr: Expr = meta.value()?.parse()?;
                check_factory_calls(&expr)?;
                spec.default_factory = Some(expr);
            } else if meta.path.is_ident("metadata") {
                meta.parse_nested_meta(|entry| {
                    let entry = MetaEntry::parse(&entry)?;
                    match spec.metadata.iter_mut().find(|seen| seen.key == entry.key) {
                        Some(seen) => seen.value = entry.value,
                        None => spec.metadata.push(entry)
                    }
                    Ok(())
                })?;
            } else if meta.path.is_ident("property") {
                spec.property = true;
            } else {
                return Err(meta.error(
                    "unknown field option; expected `default`, `default_factory`, `metadata` or `property`"
                ));
            }
            Ok(())
        })?;

        if spec.property && (spec.default.is_some() || spec.default_factory.is_some()) {
            return Err(syn::Error::new_spanned(
                attr,
                "a `property` field is filled by the constructor and cannot declare a default"
            ));
        }

        Ok(spec)
    }
}

/// Whether `call` is a `factory(...)` wrapper call.
#[must_use]
pub fn is_factory_call(call: &ExprCall) -> bool {
    match &*call.func {
        Expr::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "factory"),
        _ => false
    }
}

fn check_factory_calls(expr: &Expr) -> syn::Result<()> {
    match expr {
        Expr::Group(group) => check_factory_calls(&group.expr),
        Expr::Paren(paren) => check_factory_calls(&paren.expr),
        Expr::Call(call) if is_factory_call(call) && call.args.len() != 1 => Err(
            syn::Error::new_spanned(call, "`factory(...)` takes exactly one zero-argument callable")
        ),
        _ => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn parse(attr: Attribute) -> syn::Result<FieldSpec> {
        FieldSpec::from_attr(&attr)
    }

    #[test]
    fn word_form_is_empty() {
        let spec = parse(parse_quote!(#[field])).unwrap();
        assert!(spec.default.is_none() && spec.default_factory.is_none());
        assert!(!spec.property);
        assert!(spec.metadata.is_empty());
    }

    #[test]
    fn default_keeps_expression() {
        let spec = parse(parse_quote!(#[field(default = vec![1, 2], metadata(a = 1))])).unwrap();
        assert!(matches!(spec.default, Some(Expr::Macro(_))));
        assert_eq!(spec.metadata.len(), 1);
    }

    #[test]
    fn default_factory_keeps_expression() {
        let spec = parse(parse_quote!(#[field(default_factory = Vec::new)])).unwrap();
        assert!(spec.default.is_none());
        assert!(spec.default_factory.is_some());
    }

    #[test]
    fn both_defaults_are_recorded() {
        let spec = parse(parse_quote!(#[field(default = 1, default_factory = make)])).unwrap();
        assert!(spec.default.is_some());
        assert!(spec.default_factory.is_some());
    }

    #[test]
    fn property_flag() {
        let spec = parse(parse_quote!(#[field(property)])).unwrap();
        assert!(spec.property);
        assert!(spec.default.is_none() && spec.default_factory.is_none());
    }

    #[test]
    fn property_with_default_is_rejected() {
        assert!(parse(parse_quote!(#[field(property, default = 1)])).is_err());
        assert!(parse(parse_quote!(#[field(default_factory = f, property)])).is_err());
    }

    #[test]
    fn repeated_default_is_rejected() {
        assert!(parse(parse_quote!(#[field(default = 1, default = 2)])).is_err());
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(parse(parse_quote!(#[field(frozen)])).is_err());
    }

    #[test]
    fn factory_call_arity_is_checked() {
        assert!(parse(parse_quote!(#[field(default = factory(make))])).is_ok());
        assert!(parse(parse_quote!(#[field(default = inity::factory(make))])).is_ok());
        assert!(parse(parse_quote!(#[field(default = factory())])).is_err());
        assert!(parse(parse_quote!(#[field(default = factory(a, b))])).is_err());
    }

    #[test]
    fn repeated_metadata_key_keeps_position_and_last_value() {
        let spec = parse(parse_quote!(#[field(metadata(a = 1, b = 2, a = 3))])).unwrap();
        let keys: Vec<_> = spec.metadata.iter().map(|entry| entry.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert!(matches!(spec.metadata[0].value, super::super::metadata::MetaLiteral::Int(3)));
    }
}
