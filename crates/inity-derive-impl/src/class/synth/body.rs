// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Constructor body.
//!
//! | Role | Statement |
//! |------|-----------|
//! | standard | `name: name` in the struct literal |
//! | property shadow | `_name: name` in the struct literal |
//! | construction-only | passed to the hook |
//! | class-scoped | nothing |
//!
//! A hook requested with `hook` or found in the class module is called
//! directly:
//!
//! ```rust,ignore
//! let mut this = Self { a, _b: b };
//! this.after_init(token);
//! this
//! ```
//!
//! Otherwise the call goes through a trait local to the constructor whose
//! default method discards its arguments. Inherent methods take precedence
//! over trait methods, so an `after_init` defined anywhere on the class is
//! still reached:
//!
//! ```rust,ignore
//! let mut this = Self { a, _b: b };
//! trait InityAfterInit {
//!     fn after_init(&mut self, token: String) {
//!         let _ = token;
//!     }
//! }
//! impl InityAfterInit for Holder {}
//! this.after_init(token);
//! this
//! ```

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::Ident;

use crate::class::{
    classify::FieldRole,
    collector::FieldList,
    descriptor::FieldDescriptor,
    parse::ClassDef
};

/// One field initializer of the struct literal.
#[derive(Debug)]
struct Assignment<'a> {
    target: &'a Ident,
    param:  &'a Ident
}

impl ToTokens for Assignment<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            target,
            param
        } = self;
        if target == param {
            tokens.extend(quote! { #param });
        } else {
            tokens.extend(quote! { #target: #param });
        }
    }
}

/// How the constructor reaches the post-construction hook.
#[derive(Debug)]
enum Hook {
    /// The hook is known to exist.
    Direct(Ident),

    /// The hook may exist; a no-op trait method stands in for it.
    Fallback(Ident)
}

/// Statements of a generated constructor.
#[derive(Debug)]
pub struct Body<'a> {
    class:       &'a Ident,
    assignments: Vec<Assignment<'a>>,
    init_vars:   Vec<&'a FieldDescriptor>,
    hook:        Hook
}

impl<'a> Body<'a> {
    /// Plan the body of `class`.
    #[must_use]
    pub fn new(class: &'a ClassDef, fields: &'a FieldList) -> Self {
        let assignments = fields
            .stored()
            .filter_map(|field| {
                field.storage_ident().map(|target| Assignment {
                    target,
                    param: &field.ident
                })
            })
            .collect();
        let hook = if class.has_hook() {
            Hook::Direct(class.hook_ident())
        } else {
            Hook::Fallback(class.hook_ident())
        };
        Self {
            class: &class.ident,
            assignments,
            init_vars: fields.of_role(FieldRole::InitVar).collect(),
            hook
        }
    }
}

impl ToTokens for Body<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let assignments = &self.assignments;
        let args: Vec<_> = self.init_vars.iter().map(|field| &field.ident).collect();
        let this = Ident::new("this", Span::mixed_site());

        let (hook, fallback) = match &self.hook {
            Hook::Direct(hook) => (hook, TokenStream::new()),
            Hook::Fallback(hook) => {
                let class = self.class;
                let types = self.init_vars.iter().map(|field| &field.value_ty);
                let fallback = Ident::new("InityAfterInit", Span::mixed_site());
                (hook, quote! {
                    #[allow(dead_code)]
                    trait #fallback {
                        fn #hook(&mut self, #(#args: #types),*) {
                            #(let _ = #args;)*
                        }
                    }
                    impl #fallback for #class {}
                })
            }
        };

        tokens.extend(quote! {
            #[allow(unused_mut)]
            let mut #this = Self { #(#assignments),* };
            #fallback
            #this.#hook(#(#args),*);
            #this
        });
    }
}
