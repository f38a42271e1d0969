// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field descriptors and default resolution.
//!
//! The default of a field declared in class `C` is the class attribute of
//! the same name as seen from `C`: the nearest `#[field(...)]` declaration
//! in the ancestry of `C`. A resolved default is then one of:
//!
//! | Source | Resolved |
//! |--------|----------|
//! | no class attribute, or metadata only | `Missing` |
//! | `property` | `Property` |
//! | `default = factory(f)` | `Factory` |
//! | `default = path` whose last segment contains the factory suffix | `Factory` |
//! | `default_factory = f` (without `default`) | `Factory` |
//! | any other `default = expr` | `Value` |
//!
//! The suffix comparison is case-sensitive, so a constant such as
//! `MAX_FACTORY_WORKERS` stays a value. Factory defaults are produced
//! once per class and cloned into every instance; value defaults are
//! evaluated on every construction.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Attribute, Expr, Ident, Lit, Type, Visibility};

use super::{
    classify::{self, FieldRole},
    parse::{FieldSpec, MetaEntry, Settings, is_factory_call},
    walker::{Annotation, ClassTable}
};

/// Default value of a field after resolution.
#[derive(Debug, Clone)]
pub enum ResolvedDefault {
    /// No default: the field is a required parameter.
    Missing,

    /// Expression evaluated on every construction.
    Value(Expr),

    /// Callable producing the default once per class.
    Factory(Expr),

    /// Placeholder of a property field.
    Property
}

impl ResolvedDefault {
    /// Resolve the default declared by a `#[field(...)]` spec.
    #[must_use]
    pub fn from_spec(spec: &FieldSpec, settings: &Settings) -> Self {
        if spec.property {
            return Self::Property;
        }
        match (&spec.default, &spec.default_factory) {
            (Some(expr), _) if is_factory_tagged(expr, &settings.factory_suffix) => {
                Self::Factory(expr.clone())
            }
            (Some(expr), _) => Self::Value(expr.clone()),
            (None, Some(factory)) => Self::Factory(factory.clone()),
            (None, None) => Self::Missing
        }
    }

    /// Whether the field has a default.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// `::inity::DefaultKind` expression for the field directory.
    #[must_use]
    pub fn kind_tokens(&self) -> TokenStream {
        match self {
            Self::Missing => quote! { ::inity::DefaultKind::Missing },
            Self::Value(_) => quote! { ::inity::DefaultKind::Value },
            Self::Factory(_) => quote! { ::inity::DefaultKind::Factory },
            Self::Property => quote! { ::inity::DefaultKind::Property }
        }
    }

    /// Short rendering used in signature summaries.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Value(expr) => expr.to_token_stream().to_string(),
            Self::Factory(_) => "<factory>".to_string(),
            Self::Property => "<property>".to_string()
        }
    }
}

fn is_factory_tagged(expr: &Expr, suffix: &str) -> bool {
    match expr {
        Expr::Group(group) => is_factory_tagged(&group.expr, suffix),
        Expr::Paren(paren) => is_factory_tagged(&paren.expr, suffix),
        Expr::Call(call) => is_factory_call(call),
        Expr::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident.to_string().contains(suffix)),
        _ => false
    }
}

/// Whether `expr` is a string literal.
#[must_use]
pub fn is_str_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Lit(lit) => matches!(lit.lit, Lit::Str(_)),
        Expr::Group(group) => is_str_literal(&group.expr),
        _ => false
    }
}

/// A field of the target class with its resolved default.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field identifier as declared.
    pub ident: Ident,

    /// Declared type, markers included.
    pub ty: Type,

    /// Type of the values the field holds.
    pub value_ty: Type,

    /// Field visibility.
    pub vis: Visibility,

    /// Pass-through attributes.
    pub attrs: Vec<Attribute>,

    /// Class whose body declares the field.
    pub declared_in: Ident,

    /// Resolved default.
    pub default: ResolvedDefault,

    /// Metadata of the class attribute the default came from.
    pub metadata: Vec<MetaEntry>,

    /// Stored field name of a property.
    pub shadow: Ident
}

impl FieldDescriptor {
    /// Build the descriptor of one annotation.
    ///
    /// `settings` are those of the class being generated; the default is
    /// looked up from the declaring class.
    ///
    /// # Errors
    ///
    /// Returns an error for marker types without a value type and
    /// propagates ancestry errors.
    pub fn resolve(
        table: &ClassTable,
        annotation: Annotation<'_>,
        settings: &Settings
    ) -> darling::Result<Self> {
        let Annotation {
            class,
            field
        } = annotation;
        let name = field.name();
        let (default, metadata) = match table.class_attribute(class, &name)? {
            Some(attribute) => (
                ResolvedDefault::from_spec(attribute.spec, settings),
                attribute.spec.metadata.clone()
            ),
            None => (ResolvedDefault::Missing, Vec::new())
        };

        Ok(Self {
            ident: field.ident.clone(),
            ty: field.ty.clone(),
            value_ty: classify::value_type(&field.ty)?.clone(),
            vis: field.vis.clone(),
            attrs: field.attrs.clone(),
            declared_in: class.ident.clone(),
            default,
            metadata,
            shadow: settings.shadow_ident(&name)
        })
    }

    /// Field name without any raw identifier prefix.
    #[must_use]
    pub fn name(&self) -> String {
        syn::ext::IdentExt::unraw(&self.ident).to_string()
    }

    /// Role, derived from the declared type and the resolved default.
    #[must_use]
    pub fn role(&self) -> FieldRole {
        classify::classify(&self.ty, &self.default)
    }

    /// Whether the field has a default.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_present()
    }

    /// Identifier of the stored field, if the field is stored.
    #[must_use]
    pub fn storage_ident(&self) -> Option<&Ident> {
        match self.role() {
            FieldRole::Standard => Some(&self.ident),
            FieldRole::PropertyShadow => Some(&self.shadow),
            FieldRole::InitVar | FieldRole::ClassVar => None
        }
    }
}
