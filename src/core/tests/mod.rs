//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Document validation tests
//! - Line lint tests
//! - Text fixer tests
//! - Diagnostic message tests

#[cfg(test)]
mod linter_tests;
