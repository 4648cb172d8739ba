//! Line-based style checks
//!
//! The linter never parses YAML. It walks the raw lines (terminators
//! included) and runs three independent checks on each:
//! - content longer than `MAX_LINE_LENGTH` characters
//! - an odd number of leading whitespace characters
//! - whitespace right before the line terminator
//!
//! The indentation check is a parity heuristic, not YAML nesting analysis.
//! A blank line counts its own `\n` as leading whitespace and is therefore
//! reported as inconsistently indented.

use tracing::debug;

use crate::config::{SheetError, SheetFile};
use crate::core::types::{LintKind, LintWarning, WarningList};

/// Longest allowed line content, trailing whitespace excluded
pub const MAX_LINE_LENGTH: usize = 100;

/// Lints a sheet file on disk
pub fn lint_file(sheet: &SheetFile) -> Result<WarningList, SheetError> {
    let content = sheet.read()?;
    Ok(lint_text(&content))
}

/// Lints raw text, numbering lines from 1
pub fn lint_text(content: &str) -> WarningList {
    let warnings: WarningList = content
        .split_inclusive('\n')
        .enumerate()
        .flat_map(|(index, line)| lint_line(index + 1, line))
        .collect();

    debug!(warnings = warnings.len(), "linted text");
    warnings
}

/// Runs every check on one raw line (terminator included)
pub fn lint_line(number: usize, line: &str) -> WarningList {
    let mut warnings = WarningList::new();
    let content = line.trim_end();

    if content.chars().count() > MAX_LINE_LENGTH {
        warnings.push(LintWarning::new(
            number,
            LintKind::LineTooLong { limit: MAX_LINE_LENGTH },
        ));
    }

    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    if indent % 2 != 0 {
        warnings.push(LintWarning::new(number, LintKind::OddIndentation));
    }

    if line.trim_end_matches('\n') != content {
        warnings.push(LintWarning::new(number, LintKind::TrailingWhitespace));
    }

    warnings
}
