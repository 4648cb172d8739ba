//! src/core/types.rs
//!
//! Diagnostic types produced by the validation and lint passes
//!
//! This module defines the fundamental types used throughout the pipeline:
//! - `ValidationError`: A structural or content problem in the parsed sheet
//! - `LintWarning`: A style problem found in the raw text
//! - `ErrorList` / `WarningList`: Ordered results of one pass
//!
//! The `Display` output of every variant is the exact message shown to the
//! user, so the driver never builds message strings itself.

use std::fmt;
use thiserror::Error;

/// Ordered validation errors from one pass (empty = valid)
pub type ErrorList = Vec<ValidationError>;

/// Ordered lint warnings from one pass (empty = clean)
pub type WarningList = Vec<LintWarning>;

/// Which `layout` field failed its whitelist check
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LayoutField {
    /// `layout.keyboard`
    Keyboard,
    /// `layout.system`
    System,
}

/// A problem found while walking the parsed YAML document
///
/// Variants carry the names needed to locate the problem; category and
/// shortcut names are the rendered mapping keys.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// The file is not well-formed YAML
    #[error("YAML parsing error: {0}")]
    Parse(String),

    /// The document root is a sequence, scalar or null
    #[error("Document root must be a mapping")]
    RootNotMapping,

    /// A required top-level key is absent
    #[error("Missing required top-level key: '{0}'")]
    MissingKey(&'static str),

    #[error("Title must be a string")]
    TitleNotString,

    #[error("Layout must be a dictionary")]
    LayoutNotMapping,

    /// `layout.keyboard` or `layout.system` is outside its allowed set
    #[error("{}", invalid_layout_message(.field, .allowed))]
    InvalidLayout {
        field: LayoutField,
        allowed: &'static [&'static str],
    },

    #[error("Shortcuts must be a dictionary")]
    ShortcutsNotMapping,

    /// A category's value is not a mapping of shortcuts
    #[error("Category '{0}' must contain a dictionary of shortcuts")]
    CategoryNotMapping(String),

    #[error("Shortcut '{shortcut}' in category '{category}' must have a 'description' key")]
    MissingDescription { category: String, shortcut: String },

    #[error("Description for shortcut '{shortcut}' in category '{category}' must be a string")]
    DescriptionNotString { category: String, shortcut: String },

    /// The shortcut key uses characters outside the allowed set
    #[error("Invalid shortcut format: '{shortcut}' in category '{category}'")]
    InvalidShortcutFormat { category: String, shortcut: String },
}

fn invalid_layout_message(field: &LayoutField, allowed: &[&str]) -> String {
    let label = match field {
        LayoutField::Keyboard => "keyboard layout",
        LayoutField::System => "system",
    };
    format!("Invalid {}. Must be one of: {}", label, allowed.join(", "))
}

/// Kind of style problem on a single line
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LintKind {
    /// Content (trailing whitespace excluded) exceeds the length limit
    LineTooLong { limit: usize },
    /// Odd number of leading whitespace characters
    OddIndentation,
    /// Whitespace before the line terminator
    TrailingWhitespace,
}

/// A style problem on a 1-indexed line of the raw file
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LintWarning {
    /// Line number, starting at 1
    pub line: usize,
    pub kind: LintKind,
}

impl LintWarning {
    pub fn new(line: usize, kind: LintKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LintKind::LineTooLong { limit } => {
                write!(f, "Line {} is longer than {} characters", self.line, limit)
            }
            LintKind::OddIndentation => {
                write!(f, "Line {} has inconsistent indentation", self.line)
            }
            LintKind::TrailingWhitespace => {
                write!(f, "Line {} has trailing whitespace", self.line)
            }
        }
    }
}
