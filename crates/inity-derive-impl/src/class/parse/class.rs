// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class-level attribute parsing with darling.
//!
//! # Supported Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `extends` | none | Base class inside the same class module |
//! | `hook` | `after_init` | Hook method name; declaring it calls the hook directly |
//! | `factory_suffix` | `"_factory"` | Name tag marking factory defaults |
//! | `shadow_prefix` | `"_"` | Prefix of property shadow fields |
//! | `debug` | `false` | Print the generated constructor while compiling |

use darling::{FromDeriveInput, FromMeta, util::Override};
use proc_macro2::{Span, TokenStream};
use quote::format_ident;
use syn::{
    Attribute, DeriveInput, Expr, Fields, Generics, Ident, ItemStruct, Meta, Visibility
};

use super::field::FieldDef;

/// Hook method name used when `hook` is given without a value.
pub const DEFAULT_HOOK: &str = "after_init";

/// Name tag marking factory defaults.
pub const DEFAULT_FACTORY_SUFFIX: &str = "_factory";

/// Prefix of property shadow fields.
pub const DEFAULT_SHADOW_PREFIX: &str = "_";

fn default_factory_suffix() -> String {
    DEFAULT_FACTORY_SUFFIX.to_string()
}

fn default_shadow_prefix() -> String {
    DEFAULT_SHADOW_PREFIX.to_string()
}

/// Base class reference from `extends = Base` or `extends = "Base"`.
#[derive(Debug, Clone)]
pub struct BaseClass(Ident);

impl FromMeta for BaseClass {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Path(path) if path.qself.is_none() => path
                .path
                .get_ident()
                .cloned()
                .map(Self)
                .ok_or_else(|| {
                    darling::Error::custom(
                        "`extends` names a class of the same module, not a path"
                    )
                    .with_span(path)
                }),
            Expr::Lit(lit) => Self::from_value(&lit.lit),
            Expr::Group(group) => Self::from_expr(&group.expr),
            other => Err(darling::Error::unexpected_expr_type(other))
        }
    }

    fn from_string(value: &str) -> darling::Result<Self> {
        syn::parse_str::<Ident>(value)
            .map(Self)
            .map_err(|_| darling::Error::custom(format!("`{value}` is not a class name")))
    }
}

/// Class-level options parsed from `#[inity(...)]`.
///
/// Internal struct used by darling; [`ClassDef`] combines it with the parsed
/// fields.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(inity), supports(struct_named))]
struct ClassAttrs {
    ident: Ident,

    vis: Visibility,

    generics: Generics,

    #[darling(default)]
    extends: Option<BaseClass>,

    #[darling(default)]
    hook: Option<Override<String>>,

    #[darling(default = "default_factory_suffix")]
    factory_suffix: String,

    #[darling(default = "default_shadow_prefix")]
    shadow_prefix: String,

    #[darling(default)]
    debug: bool
}

/// Per-class naming conventions used while resolving fields.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Substring marking a default as a factory (case-sensitive).
    pub factory_suffix: String,

    /// Prefix of the stored field behind a property.
    pub shadow_prefix: String
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            factory_suffix: default_factory_suffix(),
            shadow_prefix:  default_shadow_prefix()
        }
    }
}

impl Settings {
    fn validate(&self, span: &Ident) -> darling::Result<()> {
        if self.factory_suffix.is_empty() {
            return Err(darling::Error::custom("`factory_suffix` must not be empty").with_span(span));
        }
        if syn::parse_str::<Ident>(&format!("{}field", self.shadow_prefix)).is_err() {
            return Err(darling::Error::custom(format!(
                "`shadow_prefix = \"{}\"` cannot start an identifier",
                self.shadow_prefix
            ))
            .with_span(span));
        }
        Ok(())
    }

    /// Name of the stored field behind property `name`.
    #[must_use]
    pub fn shadow_ident(&self, name: &str) -> Ident {
        format_ident!("{}{}", self.shadow_prefix, name)
    }
}

/// Complete class definition.
#[derive(Debug)]
pub struct ClassDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility, reused for generated items.
    pub vis: Visibility,

    /// Struct attributes other than `#[inity]`.
    pub attrs: Vec<Attribute>,

    /// Declared fields in source order.
    pub fields: Vec<FieldDef>,

    extends: Option<Ident>,

    hook: Option<Override<String>>,

    settings: Settings,

    debug: bool,

    detected_hook: bool,

    own_constructor: bool
}

impl ClassDef {
    /// Parse a struct carrying `#[inity(...)]`.
    ///
    /// `args` are the tokens of the attribute that invoked the macro; inside
    /// a class module the options live in the struct's own `#[inity]`
    /// attributes instead.
    ///
    /// # Errors
    ///
    /// Returns darling errors for unknown options, tuple and unit structs,
    /// generic structs, and invalid naming settings.
    pub fn from_item(item: &ItemStruct, args: Option<TokenStream>) -> darling::Result<Self> {
        if !matches!(item.fields, Fields::Named(_)) {
            return Err(darling::Error::custom(
                "#[inity] classes need named fields: `struct Name { field: Type }`"
            )
            .with_span(&item.ident));
        }

        let mut input = DeriveInput::from(item.clone());
        input
            .attrs
            .retain(|attr| !(attr.path().is_ident("inity") && matches!(attr.meta, Meta::Path(_))));
        if let Some(args) = args.filter(|args| !args.is_empty()) {
            input.attrs.insert(0, syn::parse_quote!(#[inity(#args)]));
        }

        let attrs = ClassAttrs::from_derive_input(&input)?;
        if !attrs.generics.params.is_empty() || attrs.generics.where_clause.is_some() {
            return Err(darling::Error::custom(
                "#[inity] classes cannot be generic; the resolved field list is per concrete type"
            )
            .with_span(&attrs.ident));
        }

        let settings = Settings {
            factory_suffix: attrs.factory_suffix,
            shadow_prefix:  attrs.shadow_prefix
        };
        settings.validate(&attrs.ident)?;

        if let Some(Override::Explicit(name)) = &attrs.hook
            && syn::parse_str::<Ident>(name).is_err()
        {
            return Err(darling::Error::custom(format!("`hook = \"{name}\"` is not a method name"))
                .with_span(&attrs.ident));
        }

        let mut errors = darling::Error::accumulator();
        let fields = item
            .fields
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .collect();
        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            attrs: item
                .attrs
                .iter()
                .filter(|attr| !attr.path().is_ident("inity"))
                .cloned()
                .collect(),
            fields,
            extends: attrs.extends.map(|BaseClass(ident)| ident),
            hook: attrs.hook,
            settings,
            debug: attrs.debug,
            detected_hook: false,
            own_constructor: false
        })
    }

    /// Base class named by `extends`.
    #[must_use]
    pub fn extends(&self) -> Option<&Ident> {
        self.extends.as_ref()
    }

    /// Naming conventions of this class.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether `debug` was requested.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Declared field called `name`, if any.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Method called after construction.
    #[must_use]
    pub fn hook_ident(&self) -> Ident {
        match &self.hook {
            Some(Override::Explicit(name)) => format_ident!("{}", name),
            _ => Ident::new(DEFAULT_HOOK, Span::call_site())
        }
    }

    /// Whether the hook is known to exist: declared with `hook` or found in an
    /// `impl` block of the class module. Unknown hooks are reached through a
    /// no-op fallback.
    #[must_use]
    pub const fn has_hook(&self) -> bool {
        self.hook.is_some() || self.detected_hook
    }

    /// Whether the class defines `new` or `new_with` itself.
    #[must_use]
    pub const fn has_own_constructor(&self) -> bool {
        self.own_constructor
    }

    /// Record an inherent method of this class seen in the class module.
    pub fn observe_method(&mut self, method: &Ident) {
        if method == "new" || method == "new_with" {
            self.own_constructor = true;
        } else if *method == self.hook_ident() {
            self.detected_hook = true;
        }
    }

    /// Name of the generated keyword options struct.
    #[must_use]
    pub fn options_ident(&self) -> Ident {
        format_ident!("{}Options", self.ident)
    }
}
