// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type rendering.
//!
//! `TokenStream::to_string` separates every token with a space
//! (`HashMap < String , i64 >`). The helpers here glue punctuation back so
//! that the text reads like source: `HashMap<String, i64>`.

use quote::ToTokens;

/// Render a type the way it is usually written.
#[must_use]
pub fn type_text<T: ToTokens>(ty: &T) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut text = String::with_capacity(raw.len());

    for (index, &ch) in chars.iter().enumerate() {
        if ch == ' ' {
            let prev = index.checked_sub(1).map(|i| chars[i]);
            let next = chars.get(index + 1).copied();
            let glued_left = matches!(prev, Some('<' | ':' | '&' | '(' | '['));
            let glued_right = matches!(next, Some('<' | '>' | ':' | ',' | ')' | ']'));
            if glued_left || glued_right {
                continue;
            }
        }
        text.push(ch);
    }

    text
}
