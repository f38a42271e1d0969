// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use inity::prelude::*;

#[inity]
#[derive(Debug, Clone)]
pub struct Product {
    pub name: String,
    #[field(default = 0.0)]
    pub price: f64,
    #[field(default = "misc")]
    pub category: String
}

fn main() {
    let product = Product::new("chair".to_string());
    assert_eq!(product.category, "misc");

    let product = Product::new_with("table".to_string(), ProductOptions {
        price: 12.5,
        ..Default::default()
    });
    assert_eq!(product.price, 12.5);
    assert_eq!(Product::NAME, "Product");
}
