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

//! Structural and content validation of a shortcut sheet
//!
//! The sheet is loaded into a generic `serde_yaml::Value` (see
//! [`loader`](crate::core::loader) for duplicate and merge key rules) and walked by
//! pattern matching on its variants. Nothing is deserialised into a schema
//! type: a wrong shape anywhere becomes a `ValidationError`, never a fault.
//!
//! # Checks (in order)
//! 1. Root must be a mapping (otherwise this is the only error)
//! 2. Required top-level keys (`title`, `shortcuts`)
//! 3. `title` is a string
//! 4. `layout` is a mapping whose `keyboard` / `system` are whitelisted
//! 5. `shortcuts` is a mapping of categories, each a mapping of
//!    shortcut key → details with a string `description`
//! 6. Every shortcut key uses only the allowed characters
//!
//! All checks after the root check run even when earlier ones fail.
//!
//! # Example
//! ```
//! use keysheet::core::validator::validate_str;
//!
//! let errors = validate_str("title: Editor\nshortcuts:\n  Files:\n    ⌘+S:\n      description: Save\n");
//! assert!(errors.is_empty());
//! ```

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::config::{SheetError, SheetFile};
use crate::core::loader;
use crate::core::types::{ErrorList, LayoutField, ValidationError};

/// Top-level keys every sheet must define
pub const REQUIRED_KEYS: &[&str] = &["title", "shortcuts"];

/// Keyboard layouts accepted in `layout.keyboard`
pub const ALLOWED_KEYBOARDS: &[&str] = &["US", "UK", "DE", "FR", "ES"];

/// Operating systems accepted in `layout.system`
pub const ALLOWED_SYSTEMS: &[&str] = &["Darwin", "Linux", "Windows"];

/// Whole-string whitelist for shortcut keys
///
/// ASCII letters and digits, `+`, the arrows, whitespace, the Mac
/// modifier glyphs and a fixed set of punctuation. `@`, `#` and brackets
/// other than `[]` and `<>` are rejected.
#[allow(clippy::expect_used)]
static SHORTCUT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A[A-Za-z0-9+⌘⌥⌃⇧←→↑↓\s\-|\[\],.:/`"?<>=\\]+\z"#)
        .expect("shortcut pattern should be valid regex")
});

/// Returns true if `shortcut` is non-empty and made only of allowed characters
pub fn is_valid_shortcut(shortcut: &str) -> bool {
    SHORTCUT_PATTERN.is_match(shortcut)
}

/// Validates a sheet file on disk
///
/// A YAML syntax error is reported as a single `ValidationError::Parse`;
/// only I/O failures are returned as `Err`.
pub fn validate_file(sheet: &SheetFile) -> Result<ErrorList, SheetError> {
    let content = sheet.read()?;
    Ok(validate_str(&content))
}

/// Parses `content` as YAML and validates the resulting document
///
/// A repeated key keeps its last value and `<<` merge keys are expanded
/// before any check runs.
pub fn validate_str(content: &str) -> ErrorList {
    match loader::load(content) {
        Ok(document) => validate_document(&document),
        Err(e) => {
            warn!(error = %e, "sheet is not valid YAML");
            vec![ValidationError::Parse(e.to_string())]
        }
    }
}

/// Validates an already parsed document
pub fn validate_document(document: &Value) -> ErrorList {
    let Some(root) = untag(document).as_mapping() else {
        warn!("document root is not a mapping");
        return vec![ValidationError::RootNotMapping];
    };

    let mut errors = ErrorList::new();

    for &key in REQUIRED_KEYS {
        if !root.contains_key(key) {
            errors.push(ValidationError::MissingKey(key));
        }
    }

    if let Some(title) = root.get("title") {
        if !is_string(title) {
            errors.push(ValidationError::TitleNotString);
        }
    }

    if let Some(layout) = root.get("layout") {
        check_layout(layout, &mut errors);
    }

    if let Some(shortcuts) = root.get("shortcuts") {
        check_shortcuts(shortcuts, &mut errors);
    }

    debug!(errors = errors.len(), "validated document");
    errors
}

fn check_layout(layout: &Value, errors: &mut ErrorList) {
    let Value::Mapping(layout) = untag(layout) else {
        errors.push(ValidationError::LayoutNotMapping);
        return;
    };

    let fields = [
        ("keyboard", LayoutField::Keyboard, ALLOWED_KEYBOARDS),
        ("system", LayoutField::System, ALLOWED_SYSTEMS),
    ];

    for (key, field, allowed) in fields {
        if let Some(value) = layout.get(key) {
            if !is_one_of(value, allowed) {
                errors.push(ValidationError::InvalidLayout { field, allowed });
            }
        }
    }
}

fn check_shortcuts(shortcuts: &Value, errors: &mut ErrorList) {
    let Value::Mapping(categories) = untag(shortcuts) else {
        errors.push(ValidationError::ShortcutsNotMapping);
        return;
    };

    for (category, entries) in categories {
        let category = key_label(category);

        match untag(entries) {
            Value::Mapping(entries) => check_category(&category, entries, errors),
            _ => errors.push(ValidationError::CategoryNotMapping(category)),
        }
    }
}

fn check_category(category: &str, entries: &Mapping, errors: &mut ErrorList) {
    for (shortcut, details) in entries {
        let shortcut = key_label(shortcut);

        let description = match untag(details) {
            Value::Mapping(details) => details.get("description"),
            _ => None,
        };

        match description {
            None => errors.push(ValidationError::MissingDescription {
                category: category.to_string(),
                shortcut: shortcut.clone(),
            }),
            Some(description) if !is_string(description) => {
                errors.push(ValidationError::DescriptionNotString {
                    category: category.to_string(),
                    shortcut: shortcut.clone(),
                })
            }
            Some(_) => {}
        }

        if !is_valid_shortcut(&shortcut) {
            errors.push(ValidationError::InvalidShortcutFormat {
                category: category.to_string(),
                shortcut,
            });
        }
    }
}

/// Looks through YAML tags (`!tag value` is treated as `value`)
fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn is_string(value: &Value) -> bool {
    matches!(untag(value), Value::String(_))
}

fn is_one_of(value: &Value, allowed: &[&str]) -> bool {
    matches!(untag(value), Value::String(s) if allowed.contains(&s.as_str()))
}

/// Renders a mapping key as text for messages and the format check
///
/// Non-string scalars use their YAML spelling (`42`, `true`, `null`).
pub fn key_label(key: &Value) -> String {
    match untag(key) {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}
