// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core checking and fixing logic
//!
//! This module contains the three pipeline stages:
//! - Diagnostic types shared by every stage
//! - Loading and validation of the YAML document
//! - Line-based linting of the raw text
//! - Text fixes (glyph substitution, indentation)
//!
//! Each stage has a pure function over text or a parsed value plus a thin
//! `*_file` wrapper, so everything can be unit tested without touching disk.

pub mod fixer;
pub mod linter;
pub mod loader;
pub mod types;
pub mod validator;

pub use fixer::{fix_file, fix_text};
pub use linter::{lint_file, lint_text};
pub use types::*;
pub use validator::{validate_document, validate_file, validate_str};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;
