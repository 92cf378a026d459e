//! Common test utilities and fixtures.
//!
//! This module provides shared documents and helper functions to reduce
//! duplication across the test suite.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::TempDir;

// =============================================================================
// Documents
// =============================================================================

/// Two leaves under one parent.
pub const GREETINGS_JSON: &str = r#"{"a": {"b": "hello", "c": "world"}}"#;

/// Translation tree mixing string leaves with metadata of other types.
pub const LOCALE_JSON: &str = r#"{
    "menu": {
        "file": {
            "open": "Open",
            "close": "Close"
        },
        "edit": "Edit"
    },
    "errors": {
        "not_found": "Not found",
        "code": 404,
        "retryable": false,
        "hints": ["check the path", "try again"]
    },
    "version": 3,
    "meta": null
}"#;

/// Same string leaves as [`LOCALE_JSON`].
pub const LOCALE_TOML: &str = r#"
version = 3

[menu]
edit = "Edit"

[menu.file]
open = "Open"
close = "Close"

[errors]
not_found = "Not found"
code = 404
retryable = false
hints = ["check the path", "try again"]
"#;

/// Same string leaves as [`LOCALE_JSON`].
pub const LOCALE_YAML: &str = r#"
menu:
  file:
    open: Open
    close: Close
  edit: Edit
errors:
  not_found: Not found
  code: 404
  retryable: false
  hints:
    - check the path
    - try again
version: 3
meta: ~
"#;

/// Expected entries for the locale documents with the "." delimiter.
pub const LOCALE_ENTRIES: &[(&str, &str)] = &[
    ("menu.file.open", "Open"),
    ("menu.file.close", "Close"),
    ("menu.edit", "Edit"),
    ("errors.not_found", "Not found"),
];

// =============================================================================
// Helpers
// =============================================================================

/// Temporary directory that holds fixture files.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }
}

static DELIMITER_LOCK: Mutex<()> = Mutex::new(());

/// Serialise tests that touch the process-wide delimiter.
///
/// The delimiter is reset to "." when the lock is taken.
pub fn delimiter_guard() -> MutexGuard<'static, ()> {
    let guard = DELIMITER_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    flatdict::set_delimiter(flatdict::DEFAULT_DELIMITER);
    guard
}
