//! Validate → lint → fix pipeline
//!
//! Runs the three stages in order against one sheet and writes a
//! human-readable report. Findings never stop the pipeline: the fixer
//! always runs, even on a file that failed to parse. Only I/O failures
//! end the run early.
//!
//! # Example
//!
//! ```no_run
//! use keysheet::{config::SheetFile, driver::Driver};
//!
//! let sheet = SheetFile::open("shortcuts.yaml")?;
//! let report = Driver::new().run(&sheet, &mut std::io::stdout())?;
//! println!("{} errors, {} warnings", report.errors.len(), report.warnings.len());
//! # Ok::<(), keysheet::config::SheetError>(())
//! ```

use colored::Colorize;
use std::io::Write;
use tracing::{debug, info};

use crate::config::{SheetError, SheetFile};
use crate::core::{fixer, linter, validator, ErrorList, WarningList};

/// Outcome of one pipeline run
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    /// Validation errors in document order
    pub errors: ErrorList,
    /// Lint warnings in line order
    pub warnings: WarningList,
}

impl Report {
    /// True when validation found nothing
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when linting found nothing
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Passed,
    Problem,
    Heading,
}

/// Runs the pipeline and renders its output
#[derive(Clone, Copy, Debug, Default)]
pub struct Driver {
    color: bool,
}

impl Driver {
    /// Creates a driver that writes plain text
    pub fn new() -> Self {
        Self { color: false }
    }

    /// Enables or disables ANSI colours in the report
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Validates, lints and fixes `sheet`, writing progress to `out`
    ///
    /// # Errors
    ///
    /// Returns `SheetError` if the sheet cannot be read or rewritten, or if
    /// writing to `out` fails.
    pub fn run<W: Write>(&self, sheet: &SheetFile, out: &mut W) -> Result<Report, SheetError> {
        info!(path = %sheet.path().display(), "processing sheet");
        writeln!(
            out,
            "{}",
            self.paint(&format!("Processing {}...", sheet.path().display()), Tone::Heading)
        )?;

        let errors = validator::validate_file(sheet)?;
        self.print_findings(
            out,
            &errors,
            "Validation passed.",
            "Validation errors:",
        )?;

        let warnings = linter::lint_file(sheet)?;
        self.print_findings(
            out,
            &warnings,
            "Linting passed.",
            "Linting warnings:",
        )?;

        fixer::fix_file(sheet)?;
        writeln!(
            out,
            "{}",
            self.paint("YAML file has been fixed and special characters replaced.", Tone::Passed)
        )?;

        debug!(errors = errors.len(), warnings = warnings.len(), "pipeline finished");
        Ok(Report { errors, warnings })
    }

    fn print_findings<W: Write, T: std::fmt::Display>(
        &self,
        out: &mut W,
        findings: &[T],
        passed: &str,
        heading: &str,
    ) -> Result<(), SheetError> {
        if findings.is_empty() {
            writeln!(out, "{}", self.paint(passed, Tone::Passed))?;
            return Ok(());
        }

        writeln!(out, "{}", self.paint(heading, Tone::Problem))?;
        for finding in findings {
            writeln!(out, "- {}", finding)?;
        }

        Ok(())
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }

        match tone {
            Tone::Passed => text.green().to_string(),
            Tone::Problem => text.yellow().bold().to_string(),
            Tone::Heading => text.cyan().to_string(),
        }
    }
}
