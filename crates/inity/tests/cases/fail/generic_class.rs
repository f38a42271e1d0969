// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use inity::prelude::*;

#[inity]
pub struct Wrapper<T> {
    pub value: T
}

fn main() {}
