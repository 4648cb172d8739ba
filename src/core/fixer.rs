// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Text-level fixes rewritten into the sheet
//!
//! Two passes over the raw text, neither of which needs valid YAML:
//! 1. **Glyph substitution:** each entry of `SUBSTITUTIONS` is applied in
//!    table order. `⇧` has no entry and is kept as-is.
//! 2. **Indentation:** every line is re-indented with spaces, rounding the
//!    leading whitespace count down to a multiple of `INDENT_STEP`, and
//!    trailing whitespace is dropped. A whitespace-only line keeps its
//!    rounded indent.
//!
//! Lines are rejoined with `\n`. The fix is idempotent: running it on
//! its own output changes nothing.
//!
//! # Example
//! ```
//! use keysheet::core::fixer::fix_text;
//!
//! assert_eq!(fix_text("   ⌘+K:  \n"), "  cmd+K:\n");
//! ```

use tracing::debug;

use crate::config::{SheetError, SheetFile};

/// Glyph → replacement pairs, applied in order
pub const SUBSTITUTIONS: &[(char, &str)] = &[
    ('⌘', "cmd"),
    ('⌃', "ctrl"),
    ('⌥', "alt"),
];

/// Indentation is rounded down to a multiple of this many spaces
pub const INDENT_STEP: usize = 2;

/// Fixes a sheet in place and returns the content that was written
pub fn fix_file(sheet: &SheetFile) -> Result<String, SheetError> {
    let content = sheet.read()?;
    let fixed = fix_text(&content);

    if fixed == content {
        debug!(path = %sheet.path().display(), "sheet already clean");
    }
    sheet.write(&fixed)?;

    Ok(fixed)
}

/// Applies glyph substitution and indentation normalisation
pub fn fix_text(content: &str) -> String {
    let substituted = replace_glyphs(content);

    substituted
        .split('\n')
        .map(fix_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replaces every glyph listed in `SUBSTITUTIONS`
pub fn replace_glyphs(content: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(content.to_string(), |text, (glyph, replacement)| {
            text.replace(*glyph, replacement)
        })
}

fn fix_line(line: &str) -> String {
    let body = line.trim_start();
    let indent = line.chars().count() - body.chars().count();
    let indent = indent / INDENT_STEP * INDENT_STEP;

    format!("{}{}", " ".repeat(indent), body.trim_end())
}
