// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`tokens`]: Readable renderings of types for directories and summaries

pub mod tokens;
