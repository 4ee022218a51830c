// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::quest;

/// A script that assembles the anthology correctly and truncates on rewrite.
pub const COMPLIANT_SCRIPT: &str = r#"#!/bin/sh
{
  cat about.txt
  echo
  for f in notes/*.txt; do [ -e "$f" ] && tail -n 1 "$f"; done
  echo
  for f in drafts/*-v[13579].txt; do [ -e "$f" ] && tail -n 1 "$f"; done
  echo
  echo "Thank you!"
} > anthology.txt
"#;

/// Same assembly, but appending: the second run duplicates everything.
pub const APPENDING_SCRIPT: &str = r#"#!/bin/sh
{
  cat about.txt
  echo
  for f in notes/*.txt; do [ -e "$f" ] && tail -n 1 "$f"; done
  echo
  for f in drafts/*-v[13579].txt; do [ -e "$f" ] && tail -n 1 "$f"; done
  echo
  echo "Thank you!"
} >> anthology.txt
"#;

/// Temporary quest directory builder.
pub struct QuestDir {
    dir: tempfile::TempDir,
}

impl QuestDir {
    /// Empty directory, no quest files.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A fully compliant quest: header, corpora, backup, script.
    pub fn compliant() -> Self {
        let q = Self::empty();
        q.file(quest::HEADER_FILE, quest::HEADER_TEXT);
        q.file("notes/alpha.txt", "first\nsecond\nNOTE ALPHA\n");
        q.file("notes/beta.txt", "BETA\n");
        q.file("drafts/poem-v1.txt", "draft\nPOEM ONE\n");
        q.file("drafts/poem-v2.txt", "IGNORED EVEN\n");
        q.file(quest::BACKUP_FILE, quest::HEADER_TEXT);
        q.script(COMPLIANT_SCRIPT);
        q
    }

    /// Quest directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file (parent directories created automatically).
    pub fn file(&self, rel: impl AsRef<Path>, content: &str) {
        let full = self.dir.path().join(rel.as_ref());
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    /// Create a directory.
    pub fn dir(&self, rel: impl AsRef<Path>) {
        fs::create_dir_all(self.dir.path().join(rel.as_ref())).unwrap();
    }

    /// Write the anthology script and mark it executable.
    pub fn script(&self, content: &str) {
        self.file(quest::SCRIPT_FILE, content);
        self.chmod(quest::SCRIPT_FILE, 0o755);
    }

    /// Set permissions on a quest file.
    pub fn chmod(&self, rel: impl AsRef<Path>, mode: u32) {
        let path = self.dir.path().join(rel.as_ref());
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(mode);
        fs::set_permissions(&path, perms).unwrap();
    }

    /// Read a quest file to a string.
    pub fn read(&self, rel: impl AsRef<Path>) -> String {
        fs::read_to_string(self.dir.path().join(rel.as_ref())).unwrap()
    }

    /// Whether a quest path exists.
    pub fn exists(&self, rel: impl AsRef<Path>) -> bool {
        self.dir.path().join(rel.as_ref()).exists()
    }
}
