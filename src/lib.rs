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

//! Keyboard-Shortcut Sheet Checker
//!
//! Validates, lints and auto-fixes YAML files that describe a
//! keyboard-shortcut reference: a title, optional layout constraints and
//! shortcuts grouped by category.
//!
//! # Features
//!
//! - **Validation:** Structural and content rules over the parsed YAML
//! - **Linting:** Line length, indentation parity and trailing whitespace
//! - **Fixing:** Mac modifier glyphs spelled out, indentation normalised
//! - **Atomic rewrites:** The fixed sheet replaces the original in one step
//!
//! # Architecture
//!
//! - **`core`:** Diagnostics, validator, linter and fixer (pure functions)
//! - **`config`:** Sheet file access (reading, atomic rewrite)
//! - **`driver`:** The validate → lint → fix pipeline and its report
//!
//! # Examples
//!
//! ## Validating a sheet
//!
//! ```no_run
//! use keysheet::config::SheetFile;
//! use keysheet::core::validate_file;
//!
//! let sheet = SheetFile::open("shortcuts.yaml")?;
//! for error in validate_file(&sheet)? {
//!     println!("- {}", error);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Fixing text without touching disk
//!
//! ```
//! use keysheet::core::fix_text;
//!
//! assert_eq!(fix_text("   ⌘+K: Open"), "  cmd+K: Open");
//! ```

pub mod config;
pub mod core;
pub mod driver;

// Re-export commonly used types for convenience
pub use config::{SheetError, SheetFile};
pub use crate::core::{LintWarning, ValidationError};
pub use driver::{Driver, Report};
