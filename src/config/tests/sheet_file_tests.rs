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

use super::super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: Creates a temporary sheet file for testing.
fn create_test_sheet(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let sheet_path = temp_dir.path().join("shortcuts.yaml");
    fs::write(&sheet_path, content).unwrap();
    (temp_dir, sheet_path)
}

#[test]
fn test_open_existing_sheet() {
    let (_temp_dir, sheet_path) = create_test_sheet("title: Editor\n");

    let sheet = SheetFile::open(sheet_path.clone());
    assert!(sheet.is_ok(), "Should open an existing sheet");
    assert_eq!(sheet.unwrap().path(), sheet_path.as_path());
}

#[test]
fn test_open_missing_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let sheet_path = temp_dir.path().join("nonexistent.yaml");

    match SheetFile::open(sheet_path.clone()) {
        Err(SheetError::NotFound(path)) => assert_eq!(path, sheet_path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_open_directory_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let result = SheetFile::open(temp_dir.path());
    assert!(
        matches!(result, Err(SheetError::NotAFile(_))),
        "Directories are not sheets"
    );
}

#[test]
fn test_read_returns_content() {
    let (_temp_dir, sheet_path) = create_test_sheet("title: Editor\nshortcuts: {}\n");
    let sheet = SheetFile::open(sheet_path).unwrap();

    assert_eq!(sheet.read().unwrap(), "title: Editor\nshortcuts: {}\n");
}

#[test]
fn test_read_normalises_crlf() {
    let (_temp_dir, sheet_path) = create_test_sheet("title: Editor\r\nshortcuts: {}\r\n");
    let sheet = SheetFile::open(sheet_path).unwrap();

    assert_eq!(sheet.read().unwrap(), "title: Editor\nshortcuts: {}\n");
}

#[test]
fn test_normalize_newlines_lone_cr() {
    assert_eq!(normalize_newlines("a\rb\r\nc".to_string()), "a\nb\nc");
    assert_eq!(normalize_newlines("plain\n".to_string()), "plain\n");
}

#[test]
fn test_read_rejects_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let sheet_path = temp_dir.path().join("binary.yaml");
    fs::write(&sheet_path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let sheet = SheetFile::open(sheet_path).unwrap();
    assert!(
        matches!(sheet.read(), Err(SheetError::ReadFailed { .. })),
        "Invalid UTF-8 should be a read failure"
    );
}

#[test]
fn test_write_replaces_content() {
    let (_temp_dir, sheet_path) = create_test_sheet("title: Old\n");
    let sheet = SheetFile::open(sheet_path.clone()).unwrap();

    sheet.write("title: New").unwrap();

    assert_eq!(fs::read_to_string(&sheet_path).unwrap(), "title: New");
}

#[test]
fn test_write_leaves_no_temp_files() {
    let (temp_dir, sheet_path) = create_test_sheet("title: Old\n");
    let sheet = SheetFile::open(sheet_path).unwrap();

    sheet.write("title: New\n").unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "Only the sheet itself should remain");
}

#[test]
fn test_write_through_symlink_updates_target() {
    let (temp_dir, target_path) = create_test_sheet("title: x \n");
    let link_path = temp_dir.path().join("link.yaml");

    #[cfg(unix)]
    {
        use std::os::unix::fs::symlink;
        symlink(&target_path, &link_path).unwrap();

        let sheet = SheetFile::open(link_path.clone()).unwrap();
        assert_eq!(sheet.path(), link_path.as_path(), "Display path stays the link");
        assert_eq!(sheet.read().unwrap(), "title: x \n");

        sheet.write("title: x\n").unwrap();

        assert!(
            fs::symlink_metadata(&link_path).unwrap().file_type().is_symlink(),
            "Symlink should survive the rewrite"
        );
        assert_eq!(fs::read_to_string(&target_path).unwrap(), "title: x\n");
    }

    #[cfg(not(unix))]
    {
        let _ = (target_path, link_path);
        println!("Skipping symlink test on non-Unix system");
    }
}

#[test]
fn test_display_path_does_not_change_target() {
    let (_temp_dir, sheet_path) = create_test_sheet("title: Old\n");

    let sheet = SheetFile::open(sheet_path.clone())
        .unwrap()
        .with_display_path("~/shortcuts.yaml");
    assert_eq!(sheet.path(), std::path::Path::new("~/shortcuts.yaml"));

    sheet.write("title: New\n").unwrap();
    assert_eq!(fs::read_to_string(&sheet_path).unwrap(), "title: New\n");
}
