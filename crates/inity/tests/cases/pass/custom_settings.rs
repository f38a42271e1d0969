// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use inity::prelude::*;

fn build_maker() -> Vec<String> {
    vec!["built".to_string()]
}

#[inity(factory_suffix = "_maker", shadow_prefix = "cached_", hook = "finish")]
pub struct Report {
    pub title: String,
    #[field(default = build_maker)]
    pub lines: Vec<String>,
    #[field(property)]
    pub summary: Option<String>,
    #[field(default = false)]
    pub finished: bool
}

impl Report {
    fn finish(&mut self) {
        self.finished = true;
    }

    pub fn summary(&mut self) -> &str {
        let lines = self.lines.len();
        self.cached_summary
            .get_or_insert_with(|| format!("{lines} lines"))
            .as_str()
    }
}

fn main() {
    let mut report = Report::new("weekly".to_string());
    assert!(report.finished);
    assert_eq!(report.lines, ["built"]);
    assert_eq!(report.summary(), "1 lines");
}
