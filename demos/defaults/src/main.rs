// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Defaults Example with inity
//!
//! Demonstrates the forms a default can take:
//! - plain values, evaluated on every construction
//! - functions named with the factory suffix
//! - constants holding a [`Factory`], given as `default_factory`
//! - `factory(...)` around closures and constructors

use std::collections::HashMap;

use inity::prelude::*;

// ============================================================================
// Factories
// ============================================================================

fn some_factory() -> i64 {
    314
}

const DICT_FACTORY: Factory<fn() -> HashMap<String, i64>> = factory(HashMap::new);

// ============================================================================
// Class Definition
// ============================================================================

#[inity]
#[derive(Debug)]
pub struct FactoryLane {
    #[field(default = some_factory)]
    pub a: i64,
    #[field(default_factory = DICT_FACTORY)]
    pub b: HashMap<String, i64>,
    #[field(default = factory(|| "hi".to_string()))]
    pub c: String,
    #[field(default = factory(i64::default))]
    pub d: i64,
    #[field(default = String::new())]
    pub not_a_factory: String
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("demo_defaults=debug,inity_core=debug")
        .init();

    let lane = FactoryLane::new();
    tracing::info!(a = lane.a, b = ?lane.b, c = %lane.c, d = lane.d, "first instance");

    let again = FactoryLane::new_with(FactoryLaneOptions {
        d: 7,
        ..Default::default()
    });
    tracing::info!(a = again.a, d = again.d, "second instance, factories not called again");

    for field in FactoryLane::FIELDS {
        tracing::info!(
            field = field.name(),
            ty = field.type_name(),
            default = ?field.default_kind(),
            "field"
        );
    }
}
