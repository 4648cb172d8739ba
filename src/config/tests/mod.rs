//! Config module tests
//!
//! Contains test suites for sheet file access:
//! - Opening, reading and newline normalisation
//! - Atomic rewrites

#[cfg(test)]
mod sheet_file_tests;
