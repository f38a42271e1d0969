// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use inity::prelude::*;

#[inity]
pub struct Cached {
    #[field(property, default = 1)]
    pub value: i64
}

fn main() {}
