// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use inity::prelude::*;

#[inity]
mod model {
    #[inity]
    pub struct Session {
        pub token: InitVar<String>,
        #[field(default = 0)]
        pub token_len: usize
    }

    impl Session {
        fn after_init(&mut self, token: String) {
            self.token_len = token.len();
        }
    }

    #[inity(extends = Session)]
    pub struct AdminSession {
        #[field(default = true)]
        pub elevated: bool
    }
}

fn main() {}
