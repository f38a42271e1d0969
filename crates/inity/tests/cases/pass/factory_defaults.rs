// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, HashSet};

use inity::prelude::*;

fn tags_factory() -> HashSet<String> {
    HashSet::from(["new".to_string()])
}

#[inity]
pub struct Inventory {
    pub owner: String,
    #[field(default = tags_factory)]
    pub tags: HashSet<String>,
    #[field(default = factory(BTreeMap::new))]
    pub counts: BTreeMap<String, u32>,
    #[field(default_factory = || vec![1, 2, 3])]
    pub slots: Vec<u8>
}

fn main() {
    let inventory = Inventory::new("ann".to_string());
    assert!(inventory.tags.contains("new"));
    assert!(inventory.counts.is_empty());
    assert_eq!(inventory.slots, [1, 2, 3]);
}
