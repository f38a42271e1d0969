// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Inheritance Example with inity
//!
//! Demonstrates class modules:
//! - `#[inity(extends = Base)]` flattens the base fields into the subclass
//! - inherited defaults stay defaults, new fields without one are required
//! - a hook receives the construction-only fields

use inity::prelude::*;

// ============================================================================
// Class Definitions
// ============================================================================

#[inity]
mod model {
    #[inity]
    #[derive(Debug)]
    pub struct FirstClass {
        #[field(default = 1)]
        pub has_default: i64
    }

    #[inity(extends = FirstClass)]
    #[derive(Debug)]
    pub struct SecondClass {
        pub no_default: String
    }

    #[inity(extends = SecondClass)]
    #[derive(Debug)]
    pub struct ThirdClass {
        pub greeting: InitVar<String>,
        #[field(default = 0)]
        pub greeting_len: usize
    }

    impl ThirdClass {
        fn after_init(&mut self, greeting: String) {
            tracing::debug!(%greeting, "after_init");
            self.greeting_len = greeting.len();
        }
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("demo_inheritance=debug")
        .init();

    let instance = model::SecondClass::new("hi".to_string());
    tracing::info!(
        has_default = instance.has_default,
        no_default = %instance.no_default,
        "SecondClass"
    );

    // Most-derived fields come first: `greeting`, then the inherited `no_default`.
    let third = model::ThirdClass::new("hello".to_string(), "hi".to_string());
    tracing::info!(greeting_len = third.greeting_len, "ThirdClass");

    let names: Vec<_> = model::ThirdClass::FIELDS
        .iter()
        .map(|field| format!("{}@{}", field.name(), field.declared_in()))
        .collect();
    tracing::info!(?names, "ThirdClass fields");
}
