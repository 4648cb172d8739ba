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

//! Sheet file access with atomic rewrites.
//!
//! Every pipeline stage goes through `SheetFile` to touch the disk:
//!
//! - **Independent reads**: each stage opens, reads and closes the file
//! - **Universal newlines**: `\r\n` and lone `\r` are read back as `\n`
//! - **Atomic writes**: the fixer's rewrite uses temp-file-then-rename, so
//!   an interrupted run never leaves a half-written sheet
//! - **Symlinks followed**: a symlinked sheet is resolved once, so the
//!   rewrite lands on the real file and the link itself survives
//!
//! # Example
//!
//! ```no_run
//! use keysheet::config::SheetFile;
//!
//! let sheet = SheetFile::open("shortcuts.yaml")?;
//! let text = sheet.read()?;
//! sheet.write(&text.replace('⌘', "cmd"))?;
//! # Ok::<(), keysheet::config::SheetError>(())
//! ```

mod error;

pub use error::SheetError;

use atomic_write_file::AtomicWriteFile;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Handle to the YAML sheet being processed.
///
/// Holds only paths; no file handle stays open between operations.
#[derive(Clone, Debug)]
pub struct SheetFile {
    /// Path as given by the caller, used for display
    path: PathBuf,
    /// Canonical path every read and write goes through
    target: PathBuf,
}

impl SheetFile {
    /// Creates a handle for an existing sheet file.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::NotFound` if nothing exists at `path` and
    /// `SheetError::NotAFile` if it is a directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SheetError> {
        let path = path.into();

        if !path.exists() {
            return Err(SheetError::NotFound(path));
        }
        if !path.is_file() {
            return Err(SheetError::NotAFile(path));
        }

        // Follow symlinks so the atomic rename replaces the real file
        let target = fs::canonicalize(&path)?;
        if path.read_link().is_ok() {
            warn!(
                link = %path.display(),
                target = %target.display(),
                "sheet is a symlink; rewriting its target"
            );
        }

        Ok(Self { path, target })
    }

    /// Replaces the path shown to the user without changing what is read
    /// or written.
    pub fn with_display_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Path this handle was opened with (or its display override).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolved path of the file actually read and rewritten.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Reads the whole sheet with line endings normalised to `\n`.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::ReadFailed` if the file cannot be read or is
    /// not valid UTF-8.
    pub fn read(&self) -> Result<String, SheetError> {
        let raw = fs::read_to_string(&self.target).map_err(|source| SheetError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.target.display(), bytes = raw.len(), "read sheet");

        Ok(normalize_newlines(raw))
    }

    /// Replaces the sheet's content in place.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::WriteFailed` if the temporary file cannot be
    /// created, written, or renamed over the original.
    pub fn write(&self, content: &str) -> Result<(), SheetError> {
        let mut file = AtomicWriteFile::options()
            .open(&self.target)
            .map_err(|e| SheetError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

        file.write_all(content.as_bytes())
            .map_err(|e| SheetError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit()
            .map_err(|e| SheetError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

        debug!(path = %self.target.display(), bytes = content.len(), "rewrote sheet");
        Ok(())
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;
