// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use inity::prelude::*;

#[inity]
mod model {
    #[inity(extends = Missing)]
    pub struct Sub {
        pub a: i64
    }
}

fn main() {}
