// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lazy Property Example with inity
//!
//! A `#[field(property)]` field is stored under a shadow name. The accessor
//! computes the value on first read unless the constructor received one.

use inity::prelude::*;

// ============================================================================
// Class Definition
// ============================================================================

#[inity]
pub struct MyClass {
    pub name: String,
    #[field(property)]
    pub reversed: Option<String>
}

impl MyClass {
    pub fn reversed(&mut self) -> &str {
        let name = &self.name;
        self._reversed.get_or_insert_with(|| {
            tracing::info!("generating reversed name");
            name.chars().rev().collect()
        })
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("demo_lazy_property=debug")
        .init();

    let mut instance = MyClass::new("inity".to_string());
    tracing::info!(reversed = instance.reversed(), "first read");
    tracing::info!(reversed = instance.reversed(), "second read");

    let mut instance2 = MyClass::new_with("inity".to_string(), MyClassOptions {
        reversed: Some("I'm bad at reversing things".to_string())
    });
    tracing::info!(reversed = instance2.reversed(), "given");

    let storage = MyClass::field("reversed").and_then(|field| field.storage());
    tracing::info!(?storage, "storage field");
}
