// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use inity::prelude::*;

#[inity]
mod shapes {
    #[inity]
    pub struct Shape {
        #[field(default = "shape")]
        pub label: String,
        #[field(default = 0)]
        pub sides: ClassVar<u8>
    }

    #[inity(extends = Shape)]
    pub struct Square {
        pub side: f64,
        pub scale: InitVar<f64>,
        #[field(default = 4)]
        pub sides: ClassVar<u8>
    }

    impl Square {
        fn after_init(&mut self, scale: f64) {
            self.side *= scale;
        }

        pub fn area(&self) -> f64 {
            self.side * self.side
        }
    }
}

fn main() {
    let square = shapes::Square::new(2.0, 1.5);
    assert_eq!(square.area(), 9.0);
    assert_eq!(square.label, "shape");
    assert_eq!(shapes::Square::SIDES, 4);
    assert_eq!(shapes::Shape::SIDES, 0);
}
