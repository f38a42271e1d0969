// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use inity::prelude::*;

#[inity]
pub struct Pair(i64, i64);

fn main() {}
